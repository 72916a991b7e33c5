//! Outcome evaluation for the 3x3 board.
//!
//! Pure functions over a board snapshot. The arbiter calls them while
//! holding the state lock; win is always evaluated before draw.

mod draw;
mod win;

pub use draw::is_full;
pub use win::is_winning_move;
