//! Describe rooms of a map.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use game_core::{GameConfig, RoomKey, view};

use crate::commands::load_world;

/// Describe one room, or summarize every room
#[derive(Parser)]
pub struct Describe {
    /// Mansion map file
    #[arg(short, long, value_name = "FILE")]
    map: PathBuf,

    /// Room name or index; all rooms are summarized when omitted
    #[arg(value_name = "ROOM")]
    room: Option<String>,
}

impl Describe {
    pub fn execute(self) -> Result<()> {
        let world = load_world(&self.map, GameConfig::default())?;

        let Some(room) = self.room else {
            println!("{}", style(world.name()).bold().green());
            for index in 0..world.map().len() {
                println!("  {}", view::room_summary(&world, index)?);
            }
            println!();
            println!("{}", view::target_view(&world));
            for item in view::all_room_items(&world) {
                println!("  {item}");
            }
            return Ok(());
        };

        let key = match room.trim().parse::<usize>() {
            Ok(index) => RoomKey::Index(index),
            Err(_) => RoomKey::from(room.trim()),
        };
        println!("{}", view::room_description(&world, &key)?);
        Ok(())
    }
}
