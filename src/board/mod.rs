pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;


pub use color::Color;
pub use piece::Piece;
pub use square::Square;

use error::BoardError;

use crate::draughts_position;
use crate::move_generator::{self, LegalMoves};

/// Represents the state of a draughts board. The grid is the source of truth;
/// the piece and king tallies are kept in step with it on every capture and
/// promotion so that evaluation never has to rescan the grid.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    light_count: u8,
    dark_count: u8,
    light_kings: u8,
    dark_kings: u8,
    winner: Option<Color>,
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        draughts_position! {
            .o.o.o.o
            o.o.o.o.
            .o.o.o.o
            ........
            ........
            x.x.x.x.
            .x.x.x.x
            x.x.x.x.
        }
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn put(&mut self, piece: Piece) -> Result<(), BoardError> {
        let square = piece.square();
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }

        *self.count_mut(piece.color()) += 1;
        if piece.is_king() {
            *self.kings_mut(piece.color()) += 1;
        }
        *self.cell_mut(square) = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.cell_mut(square).take()?;
        *self.count_mut(piece.color()) -= 1;
        if piece.is_king() {
            *self.kings_mut(piece.color()) -= 1;
        }
        Some(piece)
    }

    /// Live pieces of `color`, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        Square::all()
            .filter_map(move |square| self.get(square))
            .filter(move |piece| piece.color() == color)
    }

    pub fn count(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_count,
            Color::Dark => self.dark_count,
        }
    }

    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_kings,
            Color::Dark => self.dark_kings,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    // Move generation delegation

    /// Legal moves of the piece on `square` under the mandatory capture rule.
    /// An empty square, or a piece that must yield to another piece's
    /// capture, gets an empty result.
    pub fn legal_moves(&self, square: Square) -> LegalMoves {
        move_generator::legal_moves(self, square)
    }

    pub fn pieces_with_captures(&self, color: Color) -> Vec<Square> {
        move_generator::pieces_with_captures(self, color)
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        move_generator::has_legal_moves(self, color)
    }

    /// Relocates the piece on `from` to `to`, crowning it if `to` is its
    /// promotion row. Returns the piece as it stands after the move.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Piece, BoardError> {
        if !self.is_occupied(from) {
            return Err(BoardError::FromSquareIsEmptyMoveApplicationError { square: from });
        }
        if self.is_occupied(to) {
            return Err(BoardError::ToSquareIsOccupiedMoveApplicationError { square: to });
        }
        Ok(self.relocate(from, to))
    }

    /// Removes every piece captured on the way to `to`. Jumping a king
    /// crowns the capturer on the spot. Must run before `move_piece`, while
    /// the capturer still stands on `from`.
    pub fn remove_captured(&mut self, from: Square, moves: &LegalMoves, to: Square) {
        for &captured_square in moves.captured_by(to) {
            let captured = match self.remove(captured_square) {
                Some(piece) => piece,
                None => continue,
            };
            if !captured.is_king() {
                continue;
            }
            if let Some(capturer) = self.cell_mut(from).as_mut() {
                let color = capturer.color();
                if capturer.crown() {
                    *self.kings_mut(color) += 1;
                }
            }
        }
    }

    /// Capture removal followed by the move itself. `to` must come from
    /// `moves`, which must have been generated for `from` on this board.
    pub(crate) fn apply_legal_move(&mut self, from: Square, moves: &LegalMoves, to: Square) -> Piece {
        self.remove_captured(from, moves, to);
        self.relocate(from, to)
    }

    /// Returns the winner if the game is over. A side loses when it has no
    /// pieces left or none of its pieces can move; light is checked first.
    pub fn terminal_state(&self) -> Option<Color> {
        Color::ALL
            .iter()
            .find(|&&color| self.count(color) == 0 || !self.has_legal_moves(color))
            .map(|color| color.opposite())
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal_state().is_some()
    }

    /// Same as `terminal_state`, but records the outcome on the board.
    pub fn check_terminal_state(&mut self) -> Option<Color> {
        self.winner = self.terminal_state();
        self.winner
    }

    fn relocate(&mut self, from: Square, to: Square) -> Piece {
        let mut piece = match self.cell_mut(from).take() {
            Some(piece) => piece,
            None => panic!("no piece on {} to relocate", from),
        };
        piece.relocate(to);
        if to.row() == piece.color().promotion_row() && piece.crown() {
            *self.kings_mut(piece.color()) += 1;
        }
        *self.cell_mut(to) = Some(piece);
        piece
    }

    fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.grid[square.row() as usize][square.col() as usize]
    }

    fn count_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Light => &mut self.light_count,
            Color::Dark => &mut self.dark_count,
        }
    }

    fn kings_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Light => &mut self.light_kings,
            Color::Dark => &mut self.dark_kings,
        }
    }
}
