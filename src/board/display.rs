use super::{Board, Square};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8u8 {
            write!(f, "{}", row + 1)?;
            for col in 0..8u8 {
                let c = self
                    .get(Square::new(row, col))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a `Board` from an 8x8 picture, first line is row 0 (light's home
/// row). `.` is an empty square, `o`/`O` a light man/king, `x`/`X` a dark
/// man/king.
#[macro_export]
macro_rules! draughts_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<char> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let (color, is_king) = match $crate::board::Piece::from_char(c) {
                Some(kind) => kind,
                None => panic!("Invalid character {:?} in draughts position", c),
            };
            let square = $crate::board::Square::new((i / 8) as u8, (i % 8) as u8);
            let piece = if is_king {
                $crate::board::Piece::king(square, color)
            } else {
                $crate::board::Piece::new(square, color)
            };
            board.put(piece).unwrap();
        }
        board
    }};
}
