//! Win detection logic.

use crate::coord::Coord;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Row-major indices of the 8 winning lines.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks whether `player` holds a complete line.
///
/// All 8 lines are checked regardless of which square was just placed.
#[instrument]
pub fn is_winning_move(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(Coord::ALL[i]) == mark))
}
