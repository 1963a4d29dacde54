//! Error types for the turn sequencer.

use crate::error::{ErrorSeverity, GameError};

/// Misuse of the turn sequencer.
///
/// Rule violations by an action are not turn errors; they are recorded in
/// the [`ActionOutcome`](crate::action::ActionOutcome).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no actors have joined the game")]
    NoActors,

    #[error("the game is already over")]
    GameFinished,

    #[error("an action was applied but the world has not been advanced for it")]
    ActionPending,

    #[error("no action has been applied this turn")]
    NoPendingAction,

    #[error("no input available for {actor}")]
    NoInput { actor: String },

    #[error("{actions} actions in a row did not consume a turn")]
    Stalled { actions: u32 },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActors | Self::NoInput { .. } => ErrorSeverity::Recoverable,
            Self::GameFinished => ErrorSeverity::Validation,
            Self::ActionPending | Self::NoPendingAction => ErrorSeverity::Internal,
            Self::Stalled { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActors => "TURN_NO_ACTORS",
            Self::GameFinished => "TURN_GAME_FINISHED",
            Self::ActionPending => "TURN_ACTION_PENDING",
            Self::NoPendingAction => "TURN_NO_PENDING_ACTION",
            Self::NoInput { .. } => "TURN_NO_INPUT",
            Self::Stalled { .. } => "TURN_STALLED",
        }
    }
}
