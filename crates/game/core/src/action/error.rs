//! Error types for action execution.

use crate::error::{ErrorSeverity, GameError};
use crate::map::LookupError;
use crate::state::{ActorId, InventoryError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cannot move from {from} to {to}: rooms are not adjacent")]
    NotAdjacent { from: String, to: String },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAdjacent { .. } => "MOVE_NOT_ADJACENT",
        }
    }
}

/// Attack failures that are errors.
///
/// Being observed is not one of them; it is reported as an
/// [`AttackOutcome`](super::AttackOutcome).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("weapon '{weapon}' not found in inventory")]
    WeaponNotFound { weapon: String },
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WeaponNotFound { .. } => "ATTACK_WEAPON_NOT_FOUND",
        }
    }
}

/// Any reason an action could not be carried out.
///
/// All variants are local and recoverable: the world is left exactly as it
/// was before the action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("actor {0:?} is not part of this game")]
    UnknownActor(ActorId),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Attack(#[from] AttackError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownActor(_) => ErrorSeverity::Internal,
            Self::Lookup(err) => err.severity(),
            Self::Move(err) => err.severity(),
            Self::Inventory(err) => err.severity(),
            Self::Attack(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "ACTION_UNKNOWN_ACTOR",
            Self::Lookup(err) => err.error_code(),
            Self::Move(err) => err.error_code(),
            Self::Inventory(err) => err.error_code(),
            Self::Attack(err) => err.error_code(),
        }
    }
}
