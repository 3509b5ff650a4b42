//! Turn order and selection state for a single game.

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError};
use crate::board::error::BoardError;
use crate::board::{Board, Color, Square};
use crate::evaluate::Difficulty;
use crate::move_generator::LegalMoves;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    /// Overrides the depth implied by the difficulty.
    pub search_depth: Option<u8>,
    pub first_turn: Color,
    pub starting_position: Board,
    pub hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            search_depth: None,
            first_turn: Color::Dark,
            starting_position: Board::starting_position(),
            hints: true,
        }
    }
}

impl SessionConfig {
    pub fn search_depth(&self) -> u8 {
        self.search_depth
            .unwrap_or_else(|| self.difficulty.search_depth())
    }

    /// Rejects settings the searcher could never play with.
    pub fn validate(&self) -> Result<(), SessionError> {
        match self.search_depth {
            Some(0) => Err(SessionError::InvalidSearchDepth { depth: 0 }),
            _ => Ok(()),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,
    #[error("the piece on {square} belongs to the other side")]
    NotYourPiece { square: Square },
    #[error("no piece on {square} to select")]
    NoPieceSelected { square: Square },
    #[error("{square} is not a legal move")]
    IllegalMove { square: Square },
    #[error("the piece on {square} has to keep jumping")]
    MustContinueJump { square: Square },
    #[error("search depth must be at least 1, got {depth}")]
    InvalidSearchDepth { depth: u8 },
    #[error("search error: {error}")]
    SearchError { error: SearchError },
    #[error("board error: {error}")]
    BoardError { error: BoardError },
}

impl From<SearchError> for SessionError {
    fn from(error: SearchError) -> Self {
        SessionError::SearchError { error }
    }
}

impl From<BoardError> for SessionError {
    fn from(error: BoardError) -> Self {
        SessionError::BoardError { error }
    }
}

/// What a successful selection did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    /// The piece on `square` is now selected.
    Selected { square: Square },
    /// The selected piece jumped to `square` and has to jump again.
    Jumped { square: Square },
    /// The turn passed to the other side. `winner` is set once the game is
    /// decided.
    TurnEnded { winner: Option<Color> },
}

pub struct GameSession {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    moves: LegalMoves,
    in_chain: bool,
    searcher: AlphaBetaSearcher,
    config: SessionConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::build(SessionConfig::default())
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        let mut board = config.starting_position.clone();
        board.check_terminal_state();

        Self {
            board,
            turn: config.first_turn,
            selected: None,
            moves: LegalMoves::default(),
            in_chain: false,
            searcher: AlphaBetaSearcher::new(config.difficulty),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// True while the selected piece is in the middle of a jump chain.
    pub fn in_chain(&self) -> bool {
        self.in_chain
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn searcher(&self) -> &AlphaBetaSearcher {
        &self.searcher
    }

    /// Legal targets of the selected piece, or nothing when hints are off.
    pub fn hints(&self) -> &[Square] {
        if !self.config.hints || self.selected.is_none() {
            return &[];
        }
        self.moves.targets()
    }

    /// Piece and king counts for both sides.
    pub fn status_line(&self) -> String {
        format!(
            "light: {} ({} kings)  dark: {} ({} kings)",
            self.board.count(Color::Light),
            self.board.kings(Color::Light),
            self.board.count(Color::Dark),
            self.board.kings(Color::Dark),
        )
    }

    /// Handles a click on `square`: selects an own piece, or moves the
    /// selected piece there if it is one of its targets. After a jump the
    /// same piece keeps the turn as long as it can jump again and was not
    /// crowned along the way.
    pub fn select(&mut self, square: Square) -> Result<Selection, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }

        if let Some(from) = self.selected {
            if self.moves.contains(square) {
                return Ok(self.play(from, square));
            }
            if self.in_chain {
                return Err(SessionError::MustContinueJump { square: from });
            }

            self.clear_selection();
            return match self.board.get(square) {
                Some(piece) if piece.color() == self.turn => Ok(self.pick(square)),
                _ => Err(SessionError::IllegalMove { square }),
            };
        }

        match self.board.get(square) {
            None => Err(SessionError::NoPieceSelected { square }),
            Some(piece) if piece.color() != self.turn => Err(SessionError::NotYourPiece { square }),
            Some(_) => Ok(self.pick(square)),
        }
    }

    /// Moves the piece on `from` to `to` as two selections.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Selection, SessionError> {
        if self.selected != Some(from) || !self.in_chain {
            self.select(from)?;
        }
        if !self.moves.contains(to) {
            return Err(SessionError::IllegalMove { square: to });
        }
        self.select(to)
    }

    /// Lets the searcher play a full turn for the side to move.
    pub fn make_computer_move(&mut self) -> Result<Selection, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if let (true, Some(square)) = (self.in_chain, self.selected) {
            return Err(SessionError::MustContinueJump { square });
        }

        let depth = self.config.search_depth();
        let maximizing = self.turn.maximize_score();
        let (score, board) = self
            .searcher
            .best_successor(&self.board, depth, maximizing)?;

        info!("{} (computer) played, score {}", self.turn, score);
        self.board = board;
        Ok(self.end_turn())
    }

    fn pick(&mut self, square: Square) -> Selection {
        self.selected = Some(square);
        self.moves = self.board.legal_moves(square);
        Selection::Selected { square }
    }

    fn play(&mut self, from: Square, to: Square) -> Selection {
        let was_king = self.board.get(from).map_or(false, |piece| piece.is_king());
        let jumped = self.moves.is_capture(to);
        let piece = self.board.apply_legal_move(from, &self.moves, to);
        info!("{} played {}{}", self.turn, from, to);

        if jumped {
            let next = self.board.legal_moves(to);
            if next.has_captures() && piece.is_king() == was_king {
                self.selected = Some(to);
                self.moves = next;
                self.in_chain = true;
                return Selection::Jumped { square: to };
            }
        }

        self.end_turn()
    }

    fn end_turn(&mut self) -> Selection {
        self.clear_selection();
        let winner = self.board.check_terminal_state();
        self.turn = self.turn.opposite();
        info!("{}", self.status_line());

        if let Some(color) = winner {
            info!("game over, {} wins", color);
        }
        Selection::TurnEnded { winner }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.moves = LegalMoves::default();
        self.in_chain = false;
    }
}
