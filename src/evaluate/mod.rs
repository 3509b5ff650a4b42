use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Color, Piece};

/// Rows a man travels from its home row to its promotion row.
const ROW_SPAN: f32 = 7.;
/// King bonus on top of a man in the medium heuristic.
const KING_BONUS: f32 = 1.5;
/// Flat value of a king in the hard heuristic.
const KING_POINTS: f32 = 2.;

/// Computer strength. The level picks the heuristic and, unless the session
/// is configured otherwise, is also the search depth in plies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn search_depth(&self) -> u8 {
        self.level()
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
impl FromStr for Difficulty {
    type Err = &'static str;
    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err("invalid difficulty; options are: easy, medium, hard"),
        }
    }
}

/// Scores the position from dark's point of view: positive favors dark.
pub fn score(board: &Board, difficulty: Difficulty) -> f32 {
    let material = f32::from(board.count(Color::Dark)) - f32::from(board.count(Color::Light));

    match difficulty {
        Difficulty::Easy => material,
        Difficulty::Medium => {
            let kings =
                f32::from(board.kings(Color::Dark)) - f32::from(board.kings(Color::Light));
            material + kings * KING_BONUS
        }
        Difficulty::Hard => Color::ALL
            .iter()
            .flat_map(|&color| board.pieces(color))
            .map(|piece| positional_value(&piece))
            .sum(),
    }
}

/// A man gains value linearly as it closes in on its promotion row; a king
/// is worth a flat amount wherever it stands.
fn positional_value(piece: &Piece) -> f32 {
    let row = f32::from(piece.square().row());
    match (piece.color(), piece.is_king()) {
        (Color::Dark, true) => KING_POINTS,
        (Color::Light, true) => -KING_POINTS,
        (Color::Dark, false) => (row - ROW_SPAN).abs() / ROW_SPAN + 1.,
        (Color::Light, false) => -row / ROW_SPAN - 1.,
    }
}
