use crate::board::{Board, Piece, Square};

/// Outcome of looking one diagonal away from a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    /// Edge of the board, an own piece, or an opponent with nothing free
    /// behind it.
    Blocked,
    /// The adjacent square is free.
    Step(Square),
    /// An opponent sits on `captured` and `landing` behind it is free.
    Jump { landing: Square, captured: Square },
}

/// Looks along a single diagonal from `piece`. Pure: the board is only read.
pub fn walk(board: &Board, piece: &Piece, row_step: i8, col_step: i8) -> Walk {
    let next = match piece.square().offset(row_step, col_step) {
        Some(square) => square,
        None => return Walk::Blocked,
    };

    match board.get(next) {
        None => Walk::Step(next),
        Some(other) if other.color() == piece.color() => Walk::Blocked,
        Some(_) => match next.offset(row_step, col_step) {
            Some(landing) if !board.is_occupied(landing) => Walk::Jump {
                landing,
                captured: next,
            },
            _ => Walk::Blocked,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::draughts_position;

    #[test]
    fn test_walk_outcomes() {
        let board = draughts_position! {
            ........
            ........
            .o......
            o.x.....
            ........
            ........
            ........
            ........
        };
        let piece = board.get(Square::new(2, 1)).unwrap();
        assert_eq!(piece.color(), Color::Light);

        // own man on a4
        assert_eq!(walk(&board, &piece, 1, -1), Walk::Blocked);
        // dark man on c4, d5 free
        assert_eq!(
            walk(&board, &piece, 1, 1),
            Walk::Jump {
                landing: Square::new(4, 3),
                captured: Square::new(3, 2),
            }
        );
        // walking backwards is only ever asked for kings, but the walk itself
        // does not care
        assert_eq!(walk(&board, &piece, -1, -1), Walk::Step(Square::new(1, 0)));

        let edge = board.get(Square::new(3, 0)).unwrap();
        assert_eq!(walk(&board, &edge, 1, -1), Walk::Blocked);
    }
}
