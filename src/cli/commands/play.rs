//! Play command - play a game against the computer.

use draughts::board::Color;
use draughts::evaluate::Difficulty;
use draughts::game::input_source::ConditionalInput;
use draughts::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, parse_depth, run_game_loop};
use super::Command;

/// The computer always plays dark.
const HUMAN_COLOR: Color = Color::Light;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "l", long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(
        short,
        long,
        parse(try_from_str = parse_depth),
        help = "Search depth in plies, at least 1 (default: the difficulty level)"
    )]
    pub depth: Option<u8>,
    #[structopt(short, long, default_value = "dark")]
    pub first: Color,
    #[structopt(long = "no-hints", help = "Do not mark the legal targets of the selected piece")]
    pub no_hints: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.difficulty, self.depth, self.first, !self.no_hints);
        run_game_loop(
            ConditionalInput {
                human_color: HUMAN_COLOR,
            },
            ConditionalStatsRenderer {
                human_color: HUMAN_COLOR,
            },
            config,
        );
    }
}
