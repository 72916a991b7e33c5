//! Gridlock - concurrent tic-tac-toe
//!
//! Spawns two player threads against one shared board and reports the
//! outcome once both have finished.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridlock::{Actor, Arbiter, GameStatus, Player, RasterScan, UniformRandom};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(seed = ?cli.seed, "Starting gridlock");

    let game = Arbiter::new();
    let player_x = Actor::new(game.clone(), Player::X, Box::new(RasterScan));
    let player_o = Actor::new(
        game.clone(),
        Player::O,
        Box::new(UniformRandom::new(cli.seed)),
    );

    let handle_x = player_x.spawn()?;
    let handle_o = player_o.spawn()?;

    handle_x
        .join()
        .map_err(|_| anyhow::anyhow!("player X thread panicked"))?;
    handle_o
        .join()
        .map_err(|_| anyhow::anyhow!("player O thread panicked"))?;

    let state = game.snapshot();
    println!("Final board:");
    println!("{}", state.board().display());
    match state.status() {
        GameStatus::Won(player) => println!("The winner is {player}!"),
        GameStatus::Draw => println!("It's a draw!"),
        GameStatus::InProgress => warn!("Players exited before the game finished"),
    }

    Ok(())
}
