//! Move-selection strategies.
//!
//! A strategy performs one placement pass: it feeds candidate coordinates
//! to the arbiter until a move lands, no candidate remains, or it observes
//! that no candidate can succeed this cycle. Retrying a later cycle is the
//! driving loop's job, not the strategy's.

mod random;
mod raster;

pub use random::UniformRandom;
pub use raster::RasterScan;

use crate::arbiter::Arbiter;
use crate::types::{GameStatus, Player};

/// Result of one strategy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A move landed; carries the status it produced.
    MoveAttempted(GameStatus),
    /// No candidate could be placed this cycle.
    NoLegalMoveFound,
}

/// A move-selection strategy for one player.
pub trait Strategy: Send {
    /// Runs one placement pass for `mark` against the shared game.
    fn play(&mut self, game: &Arbiter, mark: Player) -> PlayOutcome;

    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;
}
