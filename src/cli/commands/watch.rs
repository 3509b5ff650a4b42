//! Watch command - watch the computer play against itself.

use std::time::Duration;

use draughts::board::Color;
use draughts::evaluate::Difficulty;
use draughts::game::input_source::EngineInput;
use draughts::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, parse_depth, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short = "l", long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(
        short,
        long,
        parse(try_from_str = parse_depth),
        help = "Search depth in plies, at least 1 (default: the difficulty level)"
    )]
    pub depth: Option<u8>,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.difficulty, self.depth, Color::Dark, false);
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
