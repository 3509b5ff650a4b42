//! Move input parsing.

use std::io::{self, Write};
use std::str::FromStr;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Square;

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));
static SQUARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])$").expect("SQUARE_RE regex should be valid"));
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveInput {
    /// `a3b4`: select the piece on `from`, then move it to `to`.
    Coordinate { from: Square, to: Square },
    /// `b4`: a single click, either a selection or the next hop of a jump.
    Select { square: Square },
    UseEngine,
}

fn parse_square(input: &str) -> Result<Square, InputError> {
    Square::from_algebraic(input).ok_or_else(|| InputError::InvalidInput {
        input: input.to_string(),
    })
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();

        if QUIT_RE.is_match(&normalized) {
            return Err(InputError::UserExit);
        }

        if let Some(caps) = COORD_RE.captures(&normalized) {
            return Ok(MoveInput::Coordinate {
                from: parse_square(&caps[1])?,
                to: parse_square(&caps[2])?,
            });
        }

        if let Some(caps) = SQUARE_RE.captures(&normalized) {
            return Ok(MoveInput::Select {
                square: parse_square(&caps[1])?,
            });
        }

        Err(InputError::InvalidInput {
            input: input.trim().to_string(),
        })
    }
}

/// Reads one line from stdin and parses it. End of input counts as an exit.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    print!("> ");
    io::stdout().flush().map_err(|error| InputError::IOError {
        error: error.to_string(),
    })?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;
    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse().map_err(|error| {
        if let InputError::InvalidInput { input } = &error {
            warn!("rejected input {:?}", input);
        }
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(algebraic: &str) -> Square {
        Square::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn test_parse_coordinate_move() {
        assert_eq!(
            "a3b4".parse::<MoveInput>(),
            Ok(MoveInput::Coordinate {
                from: sq("a3"),
                to: sq("b4"),
            })
        );
        assert_eq!(
            "  C6D5\n".parse::<MoveInput>(),
            Ok(MoveInput::Coordinate {
                from: sq("c6"),
                to: sq("d5"),
            })
        );
    }

    #[test]
    fn test_parse_single_square() {
        assert_eq!(
            "e5".parse::<MoveInput>(),
            Ok(MoveInput::Select { square: sq("e5") })
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!("quit".parse::<MoveInput>(), Err(InputError::UserExit));
        assert_eq!("q".parse::<MoveInput>(), Err(InputError::UserExit));
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["i9", "a3-b4", "a9b1", "", "e2e4e5"].iter() {
            assert!(
                matches!(
                    input.parse::<MoveInput>(),
                    Err(InputError::InvalidInput { .. })
                ),
                "{:?} should be rejected",
                input
            );
        }
    }
}
