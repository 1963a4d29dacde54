//! Data-driven content and loaders.
//!
//! This crate reads the files a game is set up from:
//! - Mansion maps (line-oriented text format)
//! - Game configuration (TOML)
//! - Player rosters (RON)
//!
//! Loaders produce plain `game-core` types ([`game_core::WorldSpec`],
//! [`game_core::GameConfig`]); the engine validates them when the world is
//! built.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MapLoader, RosterEntry, RosterKind, RosterLoader,
};
