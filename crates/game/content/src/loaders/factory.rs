//! Content factory for building worlds from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, World, WorldSpec};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, RosterEntry, RosterLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml     (optional)
/// ├── roster.ron      (optional)
/// └── maps/
///     └── mansion.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ROSTER_FILE: &'static str = "roster.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or the defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `roster.ron`, or an empty roster when the file does not exist.
    pub fn load_roster(&self) -> LoadResult<Vec<RosterEntry>> {
        let path = self.data_dir.join(Self::ROSTER_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        RosterLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.txt`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<WorldSpec> {
        let path = self.data_dir.join("maps").join(format!("{map_name}.txt"));
        MapLoader::load(&path)
    }

    /// Builds a world from the named map and the directory's config, with
    /// the roster already seated.
    pub fn build_world(&self, map_name: &str) -> LoadResult<World> {
        let spec = self.load_map(map_name)?;
        let config = self.load_config()?;
        let mut world = World::from_spec(spec, config)
            .map_err(|e| anyhow::anyhow!("Invalid map '{}': {}", map_name, e))?;
        RosterLoader::seat(&mut world, &self.load_roster()?)?;
        Ok(world)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
