//! Per-player driving loop.

use crate::arbiter::Arbiter;
use crate::players::{PlayOutcome, Strategy};
use crate::types::Player;
use std::thread::JoinHandle;
use tracing::{debug, info};

/// One player: a mark, a strategy, and a handle to the shared game.
///
/// The actor blocks on the arbiter's turn notification rather than polling
/// on a cadence; it re-checks the status on every wake and exits once the
/// game is over.
pub struct Actor {
    game: Arbiter,
    mark: Player,
    strategy: Box<dyn Strategy>,
}

impl Actor {
    /// Creates an actor playing `mark` with the given strategy.
    pub fn new(game: Arbiter, mark: Player, strategy: Box<dyn Strategy>) -> Self {
        Self {
            game,
            mark,
            strategy,
        }
    }

    /// Runs the driving loop until the game reaches a terminal status.
    pub fn run(mut self) {
        info!(mark = %self.mark, strategy = self.strategy.name(), "Player started");
        loop {
            let status = self.game.wait_for_turn(self.mark);
            if status.is_terminal() {
                info!(mark = %self.mark, ?status, "Player exiting, game over");
                break;
            }

            match self.strategy.play(&self.game, self.mark) {
                PlayOutcome::MoveAttempted(status) => {
                    info!(
                        mark = %self.mark,
                        strategy = self.strategy.name(),
                        ?status,
                        "Player completed a move"
                    );
                }
                PlayOutcome::NoLegalMoveFound => {
                    // The game changed under us between wake and placement;
                    // the next wait re-evaluates.
                    debug!(mark = %self.mark, "No legal move this cycle");
                }
            }
        }
    }

    /// Spawns the driving loop on a named OS thread.
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name(format!("player-{}", self.mark))
            .spawn(move || self.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{RasterScan, UniformRandom};
    use crate::types::{GameStatus, Square};

    #[test]
    fn test_two_actors_finish_the_game() {
        let game = Arbiter::new();
        let x = Actor::new(game.clone(), Player::X, Box::new(RasterScan));
        let o = Actor::new(
            game.clone(),
            Player::O,
            Box::new(UniformRandom::new(Some(3))),
        );

        let hx = x.spawn().unwrap();
        let ho = o.spawn().unwrap();
        hx.join().unwrap();
        ho.join().unwrap();

        let state = game.snapshot();
        assert!(state.status().is_terminal());

        // X moves first, so X holds either as many marks as O or one more.
        let count = |mark| {
            state
                .board()
                .squares()
                .iter()
                .filter(|&&s| s == Square::Occupied(mark))
                .count()
        };
        let (x_marks, o_marks) = (count(Player::X), count(Player::O));
        match state.status() {
            GameStatus::Won(Player::X) => assert_eq!(x_marks, o_marks + 1),
            GameStatus::Won(Player::O) => assert_eq!(x_marks, o_marks),
            GameStatus::Draw => assert_eq!((x_marks, o_marks), (5, 4)),
            GameStatus::InProgress => unreachable!(),
        }
    }
}
