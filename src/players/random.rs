//! Uniform-random sampling strategy.

use super::{PlayOutcome, Strategy};
use crate::arbiter::{Arbiter, MoveError};
use crate::coord::Coord;
use crate::types::Player;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Samples squares uniformly at random until one is placeable.
///
/// A pass ends once every square has come up at least once without a
/// placement, so the pass always terminates even on a board with no
/// empty square left.
#[derive(Debug)]
pub struct UniformRandom {
    rng: SmallRng,
}

impl UniformRandom {
    /// Creates the strategy, seeded for reproducibility when `seed` is
    /// given, from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for UniformRandom {
    fn play(&mut self, game: &Arbiter, mark: Player) -> PlayOutcome {
        let mut tried = [false; 9];
        let mut untried = tried.len();

        while untried > 0 {
            let i = self.rng.random_range(0..Coord::ALL.len());
            let coord = Coord::ALL[i];
            if !tried[i] {
                tried[i] = true;
                untried -= 1;
            }

            match game.attempt(mark, coord) {
                Ok(status) => {
                    debug!(%mark, %coord, ?status, "Random sampler placed a mark");
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
        "uniform-random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Square};

    #[test]
    fn test_places_exactly_one_mark() {
        let game = Arbiter::new();
        let mut strategy = UniformRandom::new(Some(42));
        let outcome = strategy.play(&game, Player::X);
        assert_eq!(outcome, PlayOutcome::MoveAttempted(GameStatus::InProgress));
        let marks = game
            .snapshot()
            .board()
            .squares()
            .iter()
            .filter(|&&s| s != Square::Empty)
            .count();
        assert_eq!(marks, 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let pick = |seed| {
            let game = Arbiter::new();
            UniformRandom::new(Some(seed)).play(&game, Player::X);
            *game.snapshot().board()
        };
        assert_eq!(pick(7), pick(7));
    }

    #[test]
    fn test_gives_up_when_out_of_turn() {
        let game = Arbiter::new();
        game.attempt_move(Player::X, 0, 0).unwrap();
        let mut strategy = UniformRandom::new(Some(1));
        assert_eq!(
            strategy.play(&game, Player::X),
            PlayOutcome::NoLegalMoveFound
        );
    }
}
