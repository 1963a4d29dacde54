//! Play a full game.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use game_content::{ConfigLoader, RosterLoader};
use game_core::{GameConfig, GameStatus, LookAroundProvider, PcgRng, TurnEngine, World, view};

use crate::commands::load_world;
use crate::render::{RoomNames, action_label, result_label};

/// Play a game until the target dies or the turn limit is reached
///
/// Human seats from a roster only look around; there is no interactive input.
#[derive(Parser)]
pub struct Run {
    /// Mansion map file
    #[arg(short, long, value_name = "FILE")]
    map: PathBuf,

    /// Game rules (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Players to seat (RON); overrides --ai
    #[arg(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Number of AI players to seat in the first room when no roster is given
    #[arg(long, value_name = "N", default_value_t = 2)]
    ai: usize,

    /// Seed for AI decisions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Turn limit before the game is a draw
    #[arg(long, value_name = "N")]
    max_turns: Option<u32>,

    /// Only print the final result
    #[arg(short, long)]
    quiet: bool,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.game_seed = seed;
        }
        if let Some(max_turns) = self.max_turns {
            config.max_turns = max_turns;
        }

        let mut world = load_world(&self.map, config)?;
        self.seat_players(&mut world)?;
        if world.actors().is_empty() {
            bail!("No players to seat; pass --ai or a roster");
        }

        tracing::info!(
            mansion = world.name(),
            players = world.actors().len(),
            max_turns = world.config().max_turns,
            seed = world.config().game_seed,
            "starting game"
        );
        print_header(&world);

        let rooms = RoomNames::new(world.map().rooms().iter().map(|room| room.name().to_string()));
        let rng = PcgRng;
        let quiet = self.quiet;
        let mut engine = TurnEngine::new(&mut world, &rng);
        let status = engine.run_with(&mut LookAroundProvider, |report| {
            if quiet {
                return;
            }
            println!(
                "{} {:<10} {:<28} {}",
                style(format!("[{:>3}]", report.turn + 1)).dim(),
                style(&report.actor_name).bold(),
                action_label(&report.action),
                result_label(report, &rooms),
            );
        })?;

        print_summary(engine.world(), &status);
        Ok(())
    }

    fn seat_players(&self, world: &mut World) -> Result<()> {
        if let Some(path) = &self.roster {
            let roster = RosterLoader::load(path)?;
            RosterLoader::seat(world, &roster)?;
            return Ok(());
        }
        for n in 1..=self.ai {
            world
                .add_ai(&format!("CPU{n}"), 0)
                .map_err(|e| anyhow::anyhow!("Failed to seat CPU{}: {}", n, e))?;
        }
        Ok(())
    }
}

fn print_header(world: &World) {
    println!("{}", style(world.name()).bold().green());
    println!("{}", view::target_view(world));
    for actor in world.actors() {
        let kind = if actor.is_ai() { "ai" } else { "human" };
        println!(
            "  {} ({kind}) starts in {}",
            actor.name(),
            world.map().name(actor.room())
        );
    }
    println!();
}

fn print_summary(world: &World, status: &GameStatus) {
    println!();
    match status {
        GameStatus::Won { winner } => println!(
            "{} {} killed {}",
            style("Game over:").bold().green(),
            winner,
            world.target().name()
        ),
        GameStatus::Draw { turns } => println!(
            "{} {} survived {} turns",
            style("Draw:").bold().yellow(),
            world.target().name(),
            turns
        ),
        GameStatus::InProgress { turn } => {
            println!("{} stopped at turn {}", style("Unfinished:").bold().red(), turn)
        }
    }
    println!("{}", view::target_view(world));
    if let Some(last) = world.last_attacker() {
        println!("Last attacker: {last}");
    }

    let carried = view::all_actor_items(world);
    if !carried.is_empty() {
        println!("Carried: {}", view::bracketed(carried));
    }
}
