//! Print the pet's wandering route.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use game_core::GameConfig;

use crate::commands::load_world;

/// Print the route the pet wanders
#[derive(Parser)]
pub struct Path {
    /// Mansion map file
    #[arg(short, long, value_name = "FILE")]
    map: PathBuf,
}

impl Path {
    pub fn execute(self) -> Result<()> {
        let world = load_world(&self.map, GameConfig::default())?;
        let pet = world.pet();
        let map = world.map();

        println!(
            "{} {}",
            style(pet.name()).bold().cyan(),
            style(format!("visits {} of {} rooms", pet.path().len(), map.len())).dim()
        );
        for (step, room) in pet.path().iter().enumerate() {
            println!("  {:>3}. {}", step + 1, map.name(*room));
        }

        let unreached = map.len() - pet.path().len();
        if unreached > 0 {
            println!(
                "{}",
                style(format!("{unreached} room(s) cannot be reached from the first room"))
                    .yellow()
            );
        }
        Ok(())
    }
}
