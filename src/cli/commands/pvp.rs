//! PvP command - play a game against another human.

use draughts::board::Color;
use draughts::evaluate::Difficulty;
use draughts::game::input_source::HumanInput;
use draughts::game::renderer::SimpleRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "dark")]
    pub first: Color,
    #[structopt(long = "no-hints", help = "Do not mark the legal targets of the selected piece")]
    pub no_hints: bool,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(Difficulty::default(), None, self.first, !self.no_hints);
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}
