//! Subcommand implementations.
//!
//! Each command owns its CLI args and execution logic.

mod describe;
mod path;
mod run;

pub use describe::Describe;
pub use path::Path;
pub use run::Run;

use std::path::Path as FsPath;

use anyhow::Result;
use game_content::MapLoader;
use game_core::{GameConfig, World};

/// Loads a map file into an empty world.
pub(crate) fn load_world(map: &FsPath, config: GameConfig) -> Result<World> {
    let spec = MapLoader::load(map)?;
    World::from_spec(spec, config)
        .map_err(|e| anyhow::anyhow!("Invalid map {}: {}", map.display(), e))
}
