//! Action domain.
//!
//! - `Action`: what an actor asks to do, as produced by an input adapter or
//!   the AI policy
//! - `ActionKind`: the action's type and its turn-consumption policy
//! - one transition struct per kind (`MoveAction`, `AttackAction`, ...)
//!   implementing [`ActionTransition`]
//! - `ActionOutcome`: the recorded result of applying an action
mod combat;
mod error;
mod inventory;
mod kind;
mod movement;
mod observe;

pub use combat::{AttackAction, AttackOutcome, Weapon};
pub use error::{ActionError, AttackError, MoveError};
pub use inventory::PickUpAction;
pub use kind::ActionKind;
pub use movement::{MoveAction, MovePetAction};
pub use observe::{DescribeAction, InspectAction, LookAction};

use crate::map::{RoomId, RoomKey};
use crate::state::{ActorId, World};

/// Defines how a concrete action mutates the world.
///
/// `pre_validate` inspects the world **before** mutation and must not change
/// it. `apply` assumes `pre_validate` succeeded; when it fails the world must
/// be left unchanged.
pub trait ActionTransition {
    type Output;

    /// Returns the actor performing this action.
    fn actor(&self) -> ActorId;

    /// Validates pre-conditions using the world **before** mutation.
    fn pre_validate(&self, _world: &World) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the world directly.
    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError>;
}

/// An actor's request, independent of who is asking.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move { to: RoomKey },
    PickUp { item: String },
    Attack { weapon: Weapon },
    Look,
    MovePet { to: RoomKey },
    Inspect { room: RoomKey },
    Describe,
}

impl Action {
    pub fn move_to(to: impl Into<RoomKey>) -> Self {
        Self::Move { to: to.into() }
    }

    pub fn pick_up(item: impl Into<String>) -> Self {
        Self::PickUp { item: item.into() }
    }

    pub fn attack(weapon: impl Into<Weapon>) -> Self {
        Self::Attack {
            weapon: weapon.into(),
        }
    }

    pub fn move_pet(to: impl Into<RoomKey>) -> Self {
        Self::MovePet { to: to.into() }
    }

    pub fn inspect(room: impl Into<RoomKey>) -> Self {
        Self::Inspect { room: room.into() }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Move { .. } => ActionKind::Move,
            Self::PickUp { .. } => ActionKind::PickUp,
            Self::Attack { .. } => ActionKind::Attack,
            Self::Look => ActionKind::Look,
            Self::MovePet { .. } => ActionKind::MovePet,
            Self::Inspect { .. } => ActionKind::Inspect,
            Self::Describe => ActionKind::Describe,
        }
    }

    /// Routes the action through its transition on behalf of `actor`.
    ///
    /// Rules only: the world is mutated directly and no turn bookkeeping
    /// happens (the target and pet stay put, the active actor does not
    /// change). Adapters playing a game go through
    /// [`TurnEngine::apply_action`](crate::engine::TurnEngine::apply_action).
    pub fn execute(&self, actor: ActorId, world: &mut World) -> Result<ActionResult, ActionError> {
        if world.actor(actor).is_none() {
            return Err(ActionError::UnknownActor(actor));
        }
        match self {
            Self::Move { to } => {
                run(&MoveAction::new(actor, to.clone()), world).map(|(from, to)| {
                    ActionResult::Moved { from, to }
                })
            }
            Self::PickUp { item } => {
                run(&PickUpAction::new(actor, item.clone()), world).map(|item| {
                    ActionResult::PickedUp { item }
                })
            }
            Self::Attack { weapon } => {
                run(&AttackAction::new(actor, weapon.clone()), world).map(ActionResult::Attack)
            }
            Self::Look => run(&LookAction::new(actor), world)
                .map(|description| ActionResult::Looked { description }),
            Self::MovePet { to } => run(&MovePetAction::new(actor, to.clone()), world)
                .map(|to| ActionResult::PetMoved { to }),
            Self::Inspect { room } => run(&InspectAction::new(actor, room.clone()), world)
                .map(|description| ActionResult::Inspected { description }),
            Self::Describe => run(&DescribeAction::new(actor), world)
                .map(|summary| ActionResult::Described { summary }),
        }
    }
}

fn run<T: ActionTransition>(transition: &T, world: &mut World) -> Result<T::Output, ActionError> {
    transition.pre_validate(world)?;
    transition.apply(world)
}

/// What a successfully applied action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    Moved { from: RoomId, to: RoomId },
    PickedUp { item: String },
    Attack(AttackOutcome),
    Looked { description: String },
    PetMoved { to: RoomId },
    Inspected { description: String },
    Described { summary: String },
}

/// Complete record of one applied action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub actor: ActorId,
    pub kind: ActionKind,
    /// Fixed by `kind` and the config; a failed action still spends the turn.
    pub consumes_turn: bool,
    pub result: Result<ActionResult, ActionError>,
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// True when this action brought the target's health to zero.
    pub fn killed_target(&self) -> bool {
        matches!(
            self.result,
            Ok(ActionResult::Attack(AttackOutcome::Hit { killed: true, .. }))
        )
    }
}
