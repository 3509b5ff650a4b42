//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "draughts",
    about = "Draughts (checkers) against a minimax engine with alpha-beta pruning ⛂"
)]
pub enum Draughts {
    #[structopt(
        name = "play",
        about = "Play light against the computer, which plays dark. The computer searches as many plies as the `--difficulty` level (default: medium) unless `--depth` is given. Dark moves first unless you pick another side with `--first`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--difficulty` (default: medium), pausing `--delay` milliseconds between moves."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Search once from the standard setup for the side given by `--color` (default: dark) and print the chosen board, its score and the search statistics."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Draughts {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
