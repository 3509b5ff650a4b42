mod cli;

use cli::commands::Command;
use cli::Draughts;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Draughts::from_args().execute();
}
