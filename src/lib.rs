//! Gridlock - concurrent tic-tac-toe engine
//!
//! A shared 3x3 board is mutated by two independent player threads. All
//! mutation flows through the [`Arbiter`], which serializes move attempts,
//! enforces turn legality, evaluates win/draw outcomes, and wakes any
//! player blocked on a turn change.
//!
//! # Architecture
//!
//! - **Types**: board, marks, and game state (pure data)
//! - **Rules**: win/draw evaluation over a board snapshot
//! - **Arbiter**: the single mutating entry point (mutex + condvar)
//! - **Players**: move-selection strategies (raster scan, uniform-random)
//! - **Actor**: the per-player driving loop
//!
//! # Example
//!
//! ```
//! use gridlock::{Arbiter, GameStatus, Player};
//!
//! let game = Arbiter::new();
//! let status = game.attempt_move(Player::X, 0, 0)?;
//! assert_eq!(status, GameStatus::InProgress);
//! # Ok::<(), gridlock::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod actor;
mod arbiter;
mod coord;
mod players;
mod rules;
mod types;

// Crate-level exports - Actor driving loop
pub use actor::Actor;

// Crate-level exports - Move arbitration
pub use arbiter::{Arbiter, MoveError};

// Crate-level exports - Strategies
pub use players::{PlayOutcome, RasterScan, Strategy, UniformRandom};

// Crate-level exports - Outcome evaluation
pub use rules::{is_full, is_winning_move};

// Crate-level exports - Core types
pub use coord::Coord;
pub use types::{Board, GameState, GameStatus, Player, Square};
