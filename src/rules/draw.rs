//! Draw detection logic.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks whether the board has no empty square left.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|&s| s != Square::Empty)
}
