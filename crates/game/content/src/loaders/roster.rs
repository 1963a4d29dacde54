//! Player roster loader.
//!
//! A roster lists who sits at the table, in turn order:
//!
//! ```ron
//! [
//!     (name: "Alice", kind: Human, start: 0),
//!     (name: "CPU1", kind: Ai, start: 3),
//! ]
//! ```

use std::path::Path;

use game_core::{ActorId, Controller, World};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Who controls a seated actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterKind {
    Human,
    Ai,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub kind: RosterKind,
    /// Index of the starting room.
    #[serde(default)]
    pub start: usize,
}

impl RosterEntry {
    pub fn controller(&self) -> Controller {
        match self.kind {
            RosterKind::Human => Controller::Human,
            RosterKind::Ai => Controller::ai(),
        }
    }
}

/// Loader for rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: Vec<RosterEntry>
    pub fn load(path: &Path) -> LoadResult<Vec<RosterEntry>> {
        let content = read_file(path)?;
        let roster = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), seats = roster.len(), "loaded roster");
        Ok(roster)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<RosterEntry>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))
    }

    /// Seats every entry in `world`, in roster order.
    pub fn seat(world: &mut World, roster: &[RosterEntry]) -> LoadResult<Vec<ActorId>> {
        roster
            .iter()
            .map(|entry| {
                world
                    .add_actor(&entry.name, entry.start, entry.controller())
                    .map_err(|e| anyhow::anyhow!("Failed to seat '{}': {}", entry.name, e))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_defaults_to_the_first_room() {
        let roster = RosterLoader::parse(r#"[(name: "Alice", kind: Human)]"#).unwrap();
        assert_eq!(
            roster,
            vec![RosterEntry {
                name: "Alice".into(),
                kind: RosterKind::Human,
                start: 0,
            }]
        );
    }

    #[test]
    fn ai_entries_get_a_fresh_policy() {
        let entry = RosterEntry {
            name: "CPU1".into(),
            kind: RosterKind::Ai,
            start: 2,
        };
        assert!(entry.controller().is_ai());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(RosterLoader::parse(r#"[(name: "Eve", kind: Robot, start: 0)]"#).is_err());
    }
}
