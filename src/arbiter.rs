//! Move arbitration: the single mutating entry point for the shared game.

use crate::coord::Coord;
use crate::types::{GameState, GameStatus, Player};
use std::sync::{Arc, Condvar, Mutex};
use tracing::{debug, info, instrument};

/// Why a move attempt was rejected.
///
/// All variants are ordinary recoverable results: the caller's strategy
/// loop decides whether to try another coordinate or give up for this
/// cycle. A rejected attempt never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinate outside the fixed 3x3 bounds.
    #[display("coordinate ({}, {}) is outside the 3x3 board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// It's not this mark's turn.
    #[display("it is not {}'s turn", _0)]
    OutOfTurn(Player),

    /// The target square already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already reached a terminal status.
    #[display("the game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

#[derive(Debug)]
struct Shared {
    state: Mutex<GameState>,
    turn_changed: Condvar,
}

/// Cheaply cloneable handle to one shared game.
///
/// Every mutation runs as one atomic critical section: turn check,
/// occupancy check, write, outcome evaluation, and turn alternation all
/// happen under a single lock acquisition, and the turn notifier fires
/// before the lock is released. Any number of players may hold clones of
/// the handle and call [`Arbiter::attempt_move`] concurrently.
#[derive(Debug, Clone)]
pub struct Arbiter {
    shared: Arc<Shared>,
}

impl Arbiter {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(GameState::new()),
                turn_changed: Condvar::new(),
            }),
        }
    }

    /// Attempts to place `mark` at (`row`, `col`).
    ///
    /// Coordinates are validated before any lock is taken; out-of-range
    /// input is rejected with [`MoveError::InvalidCoordinate`] rather than
    /// trusted. On success the resulting status snapshot is returned.
    #[instrument(skip(self))]
    pub fn attempt_move(
        &self,
        mark: Player,
        row: usize,
        col: usize,
    ) -> Result<GameStatus, MoveError> {
        let coord = Coord::new(row, col).ok_or(MoveError::InvalidCoordinate { row, col })?;
        self.attempt(mark, coord)
    }

    /// Attempts to place `mark` at a pre-validated coordinate.
    ///
    /// The check-then-apply sequence and the turn notification execute
    /// under one guard, so no other attempt or status read can observe an
    /// intermediate state. No retries happen at this layer.
    #[instrument(skip(self))]
    pub fn attempt(&self, mark: Player, coord: Coord) -> Result<GameStatus, MoveError> {
        let mut state = self.shared.state.lock().unwrap();

        let status = state.try_move(mark, coord).inspect_err(|error| {
            debug!(%mark, %coord, %error, "Move attempt rejected");
        })?;

        // Wake every waiter after each successful move, terminal ones
        // included; waiters re-check their own predicate.
        self.shared.turn_changed.notify_all();

        info!(%mark, %coord, ?status, "Move placed");
        Ok(status)
    }

    /// Returns the current status snapshot.
    pub fn status(&self) -> GameStatus {
        self.shared.state.lock().unwrap().status()
    }

    /// Returns a snapshot of the whole game state.
    pub fn snapshot(&self) -> GameState {
        self.shared.state.lock().unwrap().clone()
    }

    /// Blocks until the game is over or it is `mark`'s turn, then returns
    /// the status observed under the lock.
    ///
    /// Level-triggered: the predicate is re-checked on every wake, so
    /// coalesced or spurious notifications are harmless.
    #[instrument(skip(self))]
    pub fn wait_for_turn(&self, mark: Player) -> GameStatus {
        let mut state = self.shared.state.lock().unwrap();
        while !state.status().is_terminal() && state.turn() != mark {
            state = self.shared.turn_changed.wait(state).unwrap();
        }
        state.status()
    }
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let game = Arbiter::new();
        assert_eq!(
            game.attempt_move(Player::X, 3, 0),
            Err(MoveError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert_eq!(
            game.attempt_move(Player::X, 0, 7),
            Err(MoveError::InvalidCoordinate { row: 0, col: 7 })
        );
        // Nothing was mutated by the rejections.
        assert_eq!(game.snapshot(), GameState::new());
    }

    #[test]
    fn test_attempt_move_applies_protocol() {
        let game = Arbiter::new();
        assert_eq!(
            game.attempt_move(Player::X, 0, 0),
            Ok(GameStatus::InProgress)
        );
        assert_eq!(
            game.attempt_move(Player::X, 0, 1),
            Err(MoveError::OutOfTurn(Player::X))
        );
        assert_eq!(
            game.attempt_move(Player::O, 0, 0),
            Err(MoveError::CellOccupied(Coord::new(0, 0).unwrap()))
        );
        assert_eq!(
            game.attempt_move(Player::O, 1, 1),
            Ok(GameStatus::InProgress)
        );
    }

    #[test]
    fn test_wait_for_turn_returns_immediately_when_due() {
        let game = Arbiter::new();
        // X moves first, so X's wait must not block.
        assert_eq!(game.wait_for_turn(Player::X), GameStatus::InProgress);
    }

    #[test]
    fn test_wait_for_turn_wakes_on_move() {
        let game = Arbiter::new();
        let waiter = {
            let game = game.clone();
            std::thread::spawn(move || game.wait_for_turn(Player::O))
        };
        // Give the waiter a chance to block before X moves.
        std::thread::sleep(std::time::Duration::from_millis(20));
        game.attempt_move(Player::X, 0, 0).unwrap();
        assert_eq!(waiter.join().unwrap(), GameStatus::InProgress);
    }

    #[test]
    fn test_wait_for_turn_wakes_on_terminal_status() {
        let game = Arbiter::new();
        game.attempt_move(Player::X, 0, 0).unwrap();
        game.attempt_move(Player::O, 1, 0).unwrap();
        game.attempt_move(Player::X, 0, 1).unwrap();
        game.attempt_move(Player::O, 1, 1).unwrap();

        // It is X's turn, so O's waiter blocks until the game ends.
        let waiter = {
            let game = game.clone();
            std::thread::spawn(move || game.wait_for_turn(Player::O))
        };
        std::thread::sleep(std::time::Duration::from_millis(20));

        // X completes the top row; the terminal move must wake O's waiter
        // even though it never becomes O's turn again.
        assert_eq!(
            game.attempt_move(Player::X, 0, 2),
            Ok(GameStatus::Won(Player::X))
        );
        assert_eq!(waiter.join().unwrap(), GameStatus::Won(Player::X));
    }
}
