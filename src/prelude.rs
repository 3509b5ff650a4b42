//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError, Successors};
pub use crate::board::{Board, Color, Piece, Square};
pub use crate::evaluate::Difficulty;
pub use crate::game::session::{GameSession, SessionConfig, SessionError, Selection};
pub use crate::move_generator::LegalMoves;
