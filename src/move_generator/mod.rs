//! Draughts move generation.
//!
//! Each piece looks along its diagonals one walk at a time (see `walk`). A
//! walk yields at most one simple step or one single jump; chained jumps are
//! produced by asking again from the landing square, which is what the
//! session and the successor enumeration do.

mod walk;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{Board, Color, Piece, Square};

pub use walk::{walk, Walk};

/// Squares jumped on the way to a target, in jump order.
pub type CaptureChain = SmallVec<[Square; 4]>;

/// Column deltas, toward column 0 first.
const COL_STEPS: [i8; 2] = [-1, 1];

/// The moves available to a single piece.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegalMoves {
    targets: Vec<Square>,
    captures: FxHashMap<Square, CaptureChain>,
}

impl LegalMoves {
    /// Reachable squares in discovery order.
    pub fn targets(&self) -> &[Square] {
        &self.targets
    }

    pub fn captures(&self) -> &FxHashMap<Square, CaptureChain> {
        &self.captures
    }

    /// Squares captured on the way to `target`; empty for a simple step.
    pub fn captured_by(&self, target: Square) -> &[Square] {
        self.captures
            .get(&target)
            .map_or(&[][..], |chain| chain.as_slice())
    }

    pub fn contains(&self, target: Square) -> bool {
        self.targets.contains(&target)
    }

    pub fn is_capture(&self, target: Square) -> bool {
        self.captures.contains_key(&target)
    }

    pub fn has_captures(&self) -> bool {
        !self.captures.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}

/// Moves of `piece` ignoring what the rest of its side can do. If the piece
/// can jump at all, its simple steps are dropped.
pub fn collect_moves(board: &Board, piece: &Piece) -> LegalMoves {
    let mut steps = Vec::new();
    let mut jumps = LegalMoves::default();

    for &row_step in piece.row_steps() {
        for &col_step in COL_STEPS.iter() {
            match walk(board, piece, row_step, col_step) {
                Walk::Blocked => {}
                Walk::Step(target) => steps.push(target),
                Walk::Jump { landing, captured } => {
                    jumps.targets.push(landing);
                    jumps
                        .captures
                        .entry(landing)
                        .or_insert_with(CaptureChain::new)
                        .push(captured);
                }
            }
        }
    }

    if jumps.has_captures() {
        return jumps;
    }

    LegalMoves {
        targets: steps,
        captures: FxHashMap::default(),
    }
}

/// Legal moves for the piece on `square`. When any piece of the same color
/// can capture, pieces without a capture of their own get nothing.
pub fn legal_moves(board: &Board, square: Square) -> LegalMoves {
    let piece = match board.get(square) {
        Some(piece) => piece,
        None => return LegalMoves::default(),
    };

    let moves = collect_moves(board, &piece);
    if moves.has_captures() || !side_has_captures(board, piece.color()) {
        return moves;
    }

    LegalMoves::default()
}

/// Squares of the pieces of `color` that have at least one capture.
pub fn pieces_with_captures(board: &Board, color: Color) -> Vec<Square> {
    board
        .pieces(color)
        .filter(|piece| collect_moves(board, piece).has_captures())
        .map(|piece| piece.square())
        .collect()
}

pub fn side_has_captures(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|piece| collect_moves(board, &piece).has_captures())
}

pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|piece| !legal_moves(board, piece.square()).is_empty())
}
