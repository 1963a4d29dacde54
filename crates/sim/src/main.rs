//! Headless harness for mansion games.
//!
//! Loads a map, seats players and plays AI turns to completion, or prints
//! what the loader made of a map file.
//!
//! ```bash
//! mansion-sim run --map crates/game/content/data/maps/mansion.txt --ai 3 --seed 7
//! mansion-sim describe --map crates/game/content/data/maps/mansion.txt "Dining Hall"
//! mansion-sim path --map crates/game/content/data/maps/mansion.txt
//! ```

mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Describe, Path, Run};

/// Simulate games of pursuit through a mansion
#[derive(Parser)]
#[command(name = "mansion-sim")]
#[command(about = "Headless simulator for mansion pursuit games", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play a game until the target dies or the turn limit is reached
    Run(Run),

    /// Describe one room, or summarize every room
    Describe(Describe),

    /// Print the route the pet wanders
    Path(Path),
}

fn main() -> Result<()> {
    // Load .env file if it exists (RUST_LOG and friends)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Describe(cmd) => cmd.execute(),
        Command::Path(cmd) => cmd.execute(),
    }
}
