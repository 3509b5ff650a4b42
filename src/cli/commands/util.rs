//! Shared utilities for CLI commands.

use draughts::board::Color;
use draughts::evaluate::Difficulty;
use draughts::game::input_source::InputSource;
use draughts::game::r#loop::GameLoop;
use draughts::game::renderer::GameRenderer;
use draughts::game::session::SessionConfig;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: SessionConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = match GameLoop::new(input_source, renderer, config) {
        Ok(game) => game,
        Err(error) => {
            eprintln!("Invalid settings: {}", error);
            std::process::exit(1);
        }
    };
    if let Err(error) = game.run() {
        eprintln!("Game error: {}", error);
        std::process::exit(1);
    }
}

pub(crate) fn create_config(
    difficulty: Difficulty,
    depth: Option<u8>,
    first_turn: Color,
    hints: bool,
) -> SessionConfig {
    SessionConfig {
        difficulty,
        search_depth: depth,
        first_turn,
        hints,
        ..SessionConfig::default()
    }
}

/// Parses `--depth`; the searcher needs at least one ply.
pub(crate) fn parse_depth(src: &str) -> Result<u8, String> {
    match src.parse::<u8>() {
        Ok(0) => Err("depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(error) => Err(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("3"), Ok(3));
        assert!(parse_depth("0").is_err());
        assert!(parse_depth("-1").is_err());
        assert!(parse_depth("deep").is_err());
    }

    #[test]
    fn test_create_config_keeps_the_override() {
        let config = create_config(Difficulty::Easy, Some(4), Color::Light, false);
        assert_eq!(config.search_depth(), 4);
        assert_eq!(config.validate(), Ok(()));
    }
}
