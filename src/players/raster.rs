//! Deterministic raster-scan strategy.

use super::{PlayOutcome, Strategy};
use crate::arbiter::{Arbiter, MoveError};
use crate::coord::Coord;
use crate::types::Player;
use tracing::debug;

/// Tries every square in row-major order and takes the first empty one.
#[derive(Debug, Default)]
pub struct RasterScan;

impl Strategy for RasterScan {
    fn play(&mut self, game: &Arbiter, mark: Player) -> PlayOutcome {
        for coord in Coord::ALL {
            match game.attempt(mark, coord) {
                Ok(status) => {
                    debug!(%mark, %coord, ?status, "Raster scan placed a mark");
                    return PlayOutcome::MoveAttempted(status);
                }
                Err(MoveError::CellOccupied(_)) => continue,
                // Out of turn or game over: no square can succeed this cycle.
                Err(_) => return PlayOutcome::NoLegalMoveFound,
            }
        }
        PlayOutcome::NoLegalMoveFound
    }

    fn name(&self) -> &'static str {
        "raster-scan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Square};

    #[test]
    fn test_takes_first_empty_square() {
        let game = Arbiter::new();
        let outcome = RasterScan.play(&game, Player::X);
        assert_eq!(outcome, PlayOutcome::MoveAttempted(GameStatus::InProgress));
        let state = game.snapshot();
        assert_eq!(
            state.board().get(Coord::ALL[0]),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_skips_occupied_squares() {
        let game = Arbiter::new();
        game.attempt_move(Player::X, 0, 0).unwrap();
        game.attempt_move(Player::O, 0, 1).unwrap();
        RasterScan.play(&game, Player::X);
        assert_eq!(
            game.snapshot().board().get(Coord::ALL[2]),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_gives_up_when_out_of_turn() {
        let game = Arbiter::new();
        game.attempt_move(Player::X, 0, 0).unwrap();
        assert_eq!(
            RasterScan.play(&game, Player::X),
            PlayOutcome::NoLegalMoveFound
        );
    }
}
