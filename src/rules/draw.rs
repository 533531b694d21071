//! Draw detection: a full board with no winning run.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if every cell on the board is occupied.
///
/// The engine only consults this after win detection has come up
/// empty, so a full board here means a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| cell.square() != Square::Empty)
}
