//! Command-line interface for gridlock.

use clap::Parser;

/// Gridlock - concurrent tic-tac-toe with threaded players
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Two threaded players race a shared 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the random player's sampling; omit for OS entropy
    #[arg(long)]
    pub seed: Option<u64>,
}
