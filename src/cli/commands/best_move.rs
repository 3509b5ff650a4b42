//! Best move command - search once from the standard setup.

use draughts::alpha_beta_searcher::AlphaBetaSearcher;
use draughts::board::{Board, Color};
use draughts::evaluate::Difficulty;
use structopt::StructOpt;

use super::util::parse_depth;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
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
    pub color: Color,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let board = Board::starting_position();
        let depth = self
            .depth
            .unwrap_or_else(|| self.difficulty.search_depth());
        let mut searcher = AlphaBetaSearcher::new(self.difficulty);

        match searcher.best_successor(&board, depth, self.color.maximize_score()) {
            Ok((score, best)) => {
                println!("{}", best);
                println!("score: {}", score);
                println!(
                    "positions searched: {} (depth: {}, cutoffs: {})",
                    searcher.searched_position_count(),
                    depth,
                    searcher.termination_count()
                );
                if let Some(duration) = searcher.last_search_duration() {
                    println!("took: {:?}", duration);
                }
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
