use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Side of the board. Light sets up on rows 0-2 and advances toward row 7,
/// Dark sets up on rows 5-7 and advances toward row 0.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Light = 0,
    Dark = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Dark is the computer's side, scores are positive in its favor.
    pub fn maximize_score(&self) -> bool {
        match self {
            Color::Dark => true,
            Color::Light => false,
        }
    }

    /// The row on which a man of this color is crowned.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Color::Dark)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Light => "light",
            Color::Dark => "dark",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "light" | "white" => Ok(Color::Light),
            "dark" | "black" => Ok(Color::Dark),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: light, dark, random"),
        }
    }
}
