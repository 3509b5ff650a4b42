//! Minimax search with alpha-beta pruning over successor boards.
//!
//! Dark is always the maximizing side and light the minimizing side. A node
//! is scored by the difficulty's heuristic when the depth runs out or the
//! game is over; otherwise its successors (see `successors`) are searched in
//! enumeration order. Only a strictly better score replaces the best board,
//! so among equal scores the first enumerated successor wins.

mod successors;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::board::{Board, Color};
use crate::evaluate::{self, Difficulty};

pub use successors::{successors, Successors};

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

/// Statistics collected during the last search.
#[derive(Clone, Debug, Default)]
struct SearchStats {
    position_count: usize,
    termination_count: usize,
    last_score: Option<f32>,
    last_duration: Option<Duration>,
}

pub struct AlphaBetaSearcher {
    difficulty: Difficulty,
    stats: SearchStats,
}

impl AlphaBetaSearcher {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            stats: SearchStats::default(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    /// Number of nodes whose remaining successors were pruned.
    pub fn termination_count(&self) -> usize {
        self.stats.termination_count
    }

    pub fn last_score(&self) -> Option<f32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Searches `depth` plies below `board` within the `[alpha, beta]` window.
    /// Returns the score of the node and the successor that achieved it. A
    /// leaf returns a copy of `board` itself.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        alpha: f32,
        beta: f32,
    ) -> (f32, Board) {
        self.stats.position_count += 1;

        if depth == 0 || board.is_terminal() {
            return (evaluate::score(board, self.difficulty), board.clone());
        }

        if maximizing {
            self.alpha_beta_max(board, depth, alpha, beta)
        } else {
            self.alpha_beta_min(board, depth, alpha, beta)
        }
    }

    fn alpha_beta_max(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f32,
        beta: f32,
    ) -> (f32, Board) {
        let mut best_score = f32::NEG_INFINITY;
        let mut best_board = None;

        for successor in successors(board, Color::Dark) {
            let (score, _) = self.search(&successor, depth - 1, false, alpha, beta);

            if score > best_score {
                best_score = score;
                best_board = Some(successor);
            }
            alpha = alpha.max(best_score);

            if beta <= alpha {
                self.stats.termination_count += 1;
                break;
            }
        }

        (best_score, best_board.unwrap_or_else(|| board.clone()))
    }

    fn alpha_beta_min(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: f32,
        mut beta: f32,
    ) -> (f32, Board) {
        let mut best_score = f32::INFINITY;
        let mut best_board = None;

        for successor in successors(board, Color::Light) {
            let (score, _) = self.search(&successor, depth - 1, true, alpha, beta);

            if score < best_score {
                best_score = score;
                best_board = Some(successor);
            }
            beta = beta.min(best_score);

            if beta <= alpha {
                self.stats.termination_count += 1;
                break;
            }
        }

        (best_score, best_board.unwrap_or_else(|| board.clone()))
    }

    /// Top level search for the side to move: dark when `maximizing`, light
    /// otherwise. Resets the statistics and records the result.
    pub fn best_successor(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
    ) -> Result<(f32, Board), SearchError> {
        if depth == 0 {
            return Err(SearchError::DepthTooLow);
        }

        let color = if maximizing { Color::Dark } else { Color::Light };
        if board.is_terminal() || !board.has_legal_moves(color) {
            return Err(SearchError::NoAvailableMoves);
        }

        self.reset_stats();
        let start = Instant::now();
        let (score, best) = self.search(
            board,
            depth,
            maximizing,
            f32::NEG_INFINITY,
            f32::INFINITY,
        );
        let duration = start.elapsed();
        self.stats.last_score = Some(score);
        self.stats.last_duration = Some(duration);

        debug!(
            "{} searched {} positions to depth {} in {:?} ({} cutoffs), score {}",
            color, self.stats.position_count, depth, duration, self.stats.termination_count, score
        );

        Ok((score, best))
    }
}
