//! Validated board coordinates.

use serde::{Deserialize, Serialize};

/// A coordinate on the 3x3 board.
///
/// Constructible only through [`Coord::new`] (which range-checks) or the
/// [`Coord::ALL`] table, so a `Coord` held by a caller always addresses a
/// real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, returning `None` if either axis is outside [0, 2].
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0-2).
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major board index (0-8).
    pub(crate) fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// All 9 coordinates in raster (row-major) order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
