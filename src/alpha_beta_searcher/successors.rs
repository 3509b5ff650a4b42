//! Lazy enumeration of the boards one full turn away.
//!
//! A turn is a simple step or a chain of jumps. Chains are followed depth
//! first with an explicit stack of partially played turns, so a board is only
//! built when the search actually asks for it and pruned siblings are never
//! materialized.

use rustc_hash::FxHashSet;

use crate::board::{Board, Color, Square};
use crate::move_generator::LegalMoves;

/// A partially played turn: the piece on `from` still has `moves` to try,
/// starting at index `next`.
struct PendingTurn {
    board: Board,
    from: Square,
    moves: LegalMoves,
    next: usize,
}

/// Iterator over the distinct boards reachable by one turn of `color`.
/// Pieces are taken row-major, and each piece's targets in the order the
/// move generator found them.
pub struct Successors<'a> {
    board: &'a Board,
    pieces: std::vec::IntoIter<Square>,
    stack: Vec<PendingTurn>,
    seen: FxHashSet<Board>,
}

impl<'a> Successors<'a> {
    pub fn new(board: &'a Board, color: Color) -> Self {
        let pieces: Vec<Square> = board.pieces(color).map(|piece| piece.square()).collect();
        Self {
            board,
            pieces: pieces.into_iter(),
            stack: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    fn start_turn(&mut self, from: Square) {
        let moves = self.board.legal_moves(from);
        if moves.is_empty() {
            return;
        }
        self.stack.push(PendingTurn {
            board: self.board.clone(),
            from,
            moves,
            next: 0,
        });
    }

    /// After a jump landed on `square`: the turn goes on if the piece can
    /// jump again and was not crowned by this jump. Returns the board when
    /// the turn is over.
    fn continue_jump(&mut self, board: Board, square: Square, was_king: bool) -> Option<Board> {
        let moves = board.legal_moves(square);
        let is_king = board.get(square).map_or(was_king, |piece| piece.is_king());
        if !moves.has_captures() || is_king != was_king {
            return Some(board);
        }

        self.stack.push(PendingTurn {
            board,
            from: square,
            moves,
            next: 0,
        });
        None
    }

    fn admit(&mut self, board: Board) -> Option<Board> {
        if self.seen.contains(&board) {
            return None;
        }
        self.seen.insert(board.clone());
        Some(board)
    }
}

impl Iterator for Successors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        loop {
            if self.stack.is_empty() {
                let from = self.pieces.next()?;
                self.start_turn(from);
                continue;
            }

            let turn = self.stack.last_mut()?;
            let target = match turn.moves.targets().get(turn.next) {
                Some(&target) => target,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            turn.next += 1;

            let was_king = turn.board.get(turn.from).map_or(false, |piece| piece.is_king());
            let jumped = turn.moves.is_capture(target);
            let mut board = turn.board.clone();
            board.apply_legal_move(turn.from, &turn.moves, target);

            let finished = if jumped {
                self.continue_jump(board, target, was_king)
            } else {
                Some(board)
            };

            if let Some(board) = finished.and_then(|board| self.admit(board)) {
                return Some(board);
            }
        }
    }
}

/// Distinct boards reachable by one turn of `color`, see `Successors`.
pub fn successors(board: &Board, color: Color) -> Successors<'_> {
    Successors::new(board, color)
}
