//! Errors raised while building a world or seating actors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur while turning a parsed map description into a
/// [`World`](super::World) or while adding actors to it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("map contains no rooms")]
    EmptyMap,

    #[error("room at position {index} has no name")]
    UnnamedRoom { index: usize },

    #[error("room name '{name}' is used more than once")]
    DuplicateRoom { name: String },

    /// A room index referenced by an item, the target or an actor is outside
    /// the loaded room list.
    #[error("{subject} references room index {index}, but the map has {len} rooms")]
    InvalidRoomIndex {
        subject: String,
        index: usize,
        len: usize,
    },

    #[error("target '{name}' starts with no health")]
    DeadTarget { name: String },

    #[error("actor name must not be empty")]
    EmptyActorName,

    #[error("an actor named '{name}' already exists")]
    DuplicateActor { name: String },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMap => "INIT_EMPTY_MAP",
            Self::UnnamedRoom { .. } => "INIT_UNNAMED_ROOM",
            Self::DuplicateRoom { .. } => "INIT_DUPLICATE_ROOM",
            Self::InvalidRoomIndex { .. } => "INIT_INVALID_ROOM_INDEX",
            Self::DeadTarget { .. } => "INIT_DEAD_TARGET",
            Self::EmptyActorName => "INIT_EMPTY_ACTOR_NAME",
            Self::DuplicateActor { .. } => "INIT_DUPLICATE_ACTOR",
        }
    }
}
