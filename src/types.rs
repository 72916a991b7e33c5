//! Core domain types for the concurrent tic-tac-toe engine.

use crate::arbiter::MoveError;
use crate::coord::Coord;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player's mark.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.squares[coord.index()]
    }

    /// Sets the square at the given coordinate.
    ///
    /// Raw writes stay crate-private: callers mutate only through the
    /// arbiter, which enforces the empty-to-occupied-once discipline.
    pub(crate) fn set(&mut self, coord: Coord, square: Square) {
        self.squares[coord.index()] = square;
    }

    /// Checks if the square at the given coordinate is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Square::Empty
    }

    /// Returns all squares as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string, `.` for empty squares,
    /// one line per row.
    pub fn display(&self) -> String {
        self.squares
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => ".",
                        Square::Occupied(Player::X) => "X",
                        Square::Occupied(Player::O) => "O",
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if the game has ended (won or drawn).
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Complete game state: board, turn, and status.
///
/// This is the single unit of mutual exclusion. It is mutated only through
/// the arbiter and becomes permanently read-only once the status is
/// terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark permitted to move next.
    turn: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark permitted to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The check-then-apply sequence for one move attempt.
    ///
    /// Validation happens strictly before the write, so a rejected attempt
    /// mutates nothing. Win is evaluated before draw: a full board holding
    /// a winning line is a win. The caller (the arbiter) holds the lock for
    /// the whole sequence.
    #[instrument(skip(self), fields(turn = %self.turn, status = ?self.status))]
    pub(crate) fn try_move(&mut self, mark: Player, coord: Coord) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        if mark != self.turn {
            return Err(MoveError::OutOfTurn(mark));
        }
        if !self.board.is_empty(coord) {
            return Err(MoveError::CellOccupied(coord));
        }

        self.board.set(coord, Square::Occupied(mark));

        if rules::is_winning_move(&self.board, mark) {
            self.status = GameStatus::Won(mark);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.turn = mark.opponent();
        }

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
