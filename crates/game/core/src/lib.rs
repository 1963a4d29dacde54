//! Deterministic rules engine for a turn-based pursuit game on a room map.
//!
//! `game-core` owns the canonical rules (map adjacency, actions, AI policy,
//! turn sequencing) and exposes pure, synchronous APIs that front ends and
//! offline tools reuse. All state mutation during play flows through
//! [`engine::TurnEngine`]; supporting crates depend on the types re-exported
//! here.
pub mod action;
pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod map;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{
    Action, ActionError, ActionKind, ActionOutcome, ActionResult, ActionTransition, AttackAction,
    AttackError, AttackOutcome, DescribeAction, InspectAction, LookAction, MoveAction, MoveError,
    MovePetAction, PickUpAction, Weapon,
};
pub use ai::{AiPolicy, PolicyState};
pub use config::GameConfig;
pub use engine::{
    ActionProvider, GameStatus, LookAroundProvider, ScriptedProvider, TurnEngine, TurnError,
    TurnReport,
};
pub use error::{ErrorSeverity, GameError};
pub use map::{LookupError, MapDimensions, Rect, Room, RoomId, RoomKey, SpatialMap};
pub use rng::{FixedRng, PcgRng, RngOracle, compute_seed};
pub use state::{
    Actor, ActorId, Controller, InitializationError, Inventory, InventoryError, Item, ItemSpec,
    RoamingEntity, RoomSpec, TargetSpec, TargetState, TurnPhase, TurnState, World, WorldSpec,
};
