use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Cannot move from {square}, the square is empty")]
    FromSquareIsEmptyMoveApplicationError { square: Square },
    #[error("Cannot move to {square}, the square is already occupied")]
    ToSquareIsOccupiedMoveApplicationError { square: Square },
}
