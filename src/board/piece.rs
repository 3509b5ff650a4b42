use super::color::Color;
use super::square::Square;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    square: Square,
    color: Color,
    is_king: bool,
}

impl Piece {
    pub fn new(square: Square, color: Color) -> Self {
        Self {
            square,
            color,
            is_king: false,
        }
    }

    pub fn king(square: Square, color: Color) -> Self {
        Self {
            square,
            color,
            is_king: true,
        }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_king(&self) -> bool {
        self.is_king
    }

    pub(super) fn relocate(&mut self, square: Square) {
        self.square = square;
    }

    /// Crowns the piece. Returns true if it was not a king before.
    pub(super) fn crown(&mut self) -> bool {
        let promoted = !self.is_king;
        self.is_king = true;
        promoted
    }

    /// Row deltas this piece may walk along: forward only for a man, both
    /// ways for a king. Forward-for-light comes first.
    pub fn row_steps(&self) -> &'static [i8] {
        match (self.color, self.is_king) {
            (_, true) => &[1, -1],
            (Color::Light, false) => &[1],
            (Color::Dark, false) => &[-1],
        }
    }

    pub fn to_char(&self) -> char {
        match (self.color, self.is_king) {
            (Color::Light, false) => 'o',
            (Color::Light, true) => 'O',
            (Color::Dark, false) => 'x',
            (Color::Dark, true) => 'X',
        }
    }

    pub fn to_unicode_piece_char(&self) -> char {
        match (self.color, self.is_king) {
            (Color::Light, false) => '⛀',
            (Color::Light, true) => '⛁',
            (Color::Dark, false) => '⛂',
            (Color::Dark, true) => '⛃',
        }
    }

    /// Inverse of `to_char`, used by `draughts_position!`.
    pub fn from_char(c: char) -> Option<(Color, bool)> {
        match c {
            'o' => Some((Color::Light, false)),
            'O' => Some((Color::Light, true)),
            'x' => Some((Color::Dark, false)),
            'X' => Some((Color::Dark, true)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crown_is_monotonic() {
        let mut piece = Piece::new(Square::new(6, 1), Color::Light);
        assert!(!piece.is_king());
        assert!(piece.crown());
        assert!(piece.is_king());
        assert!(!piece.crown());
        assert!(piece.is_king());
    }

    #[test]
    fn test_row_steps() {
        assert_eq!(Piece::new(Square::new(2, 1), Color::Light).row_steps(), &[1]);
        assert_eq!(Piece::new(Square::new(5, 0), Color::Dark).row_steps(), &[-1]);
        assert_eq!(Piece::king(Square::new(5, 0), Color::Dark).row_steps(), &[1, -1]);
    }

    #[test]
    fn test_char_round_trip() {
        for c in ['o', 'O', 'x', 'X'] {
            let (color, is_king) = Piece::from_char(c).unwrap();
            let square = Square::new(3, 4);
            let piece = if is_king {
                Piece::king(square, color)
            } else {
                Piece::new(square, color)
            };
            assert_eq!(piece.to_char(), c);
        }
        assert_eq!(Piece::from_char('.'), None);
    }
}
