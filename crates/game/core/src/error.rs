//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `MoveError`, `AttackError`) are defined in their
//! respective modules alongside the operations they validate. This module only
//! holds the classification shared by all of them.
//!
//! Every error here describes a local, recoverable condition. The engine reports
//! them to its caller as values and never aborts the game on bad input.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same actor can try a different action
/// - **Validation**: the input itself is wrong and should not be retried unchanged
/// - **Internal**: unexpected state inconsistency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: inventory full, destination not adjacent
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown room name, start index out of range
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings suitable for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::action::{ActionError, MoveError};
    use crate::state::ActorId;

    #[test]
    fn only_state_inconsistencies_are_internal() {
        let missing = ActionError::UnknownActor(ActorId(9));
        assert!(missing.severity().is_internal());

        let blocked = ActionError::from(MoveError::NotAdjacent {
            from: "Parlor".into(),
            to: "Cellar".into(),
        });
        assert!(!blocked.severity().is_internal());
        assert_eq!(blocked.severity().as_str(), "recoverable");
    }
}
