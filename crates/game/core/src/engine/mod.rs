//! Turn sequencing and action application.
//!
//! The [`TurnEngine`] is the only writer of a [`World`] during play. Each turn
//! runs through the same pipeline:
//!
//! 1. the active actor's action is obtained (policy or input adapter)
//! 2. [`TurnEngine::apply_action`] resolves it against the world
//! 3. [`TurnEngine::advance_world_if_turn_consuming`] moves the target and the
//!    roaming entity, rotates the active actor and checks the turn limit
mod errors;
mod provider;
mod turns;

pub use errors::TurnError;
pub use provider::{ActionProvider, LookAroundProvider, ScriptedProvider};
pub use turns::{GameStatus, TurnReport};

use crate::ai::AiPolicy;
use crate::map::{LookupError, RoomKey};
use crate::rng::RngOracle;
use crate::state::World;

/// Drives one [`World`] from its first turn to a win or a draw.
///
/// Single-threaded and non-reentrant: every call fully resolves before it
/// returns.
pub struct TurnEngine<'a> {
    world: &'a mut World,
    rng: &'a dyn RngOracle,
    policy: AiPolicy,
}

impl<'a> TurnEngine<'a> {
    pub fn new(world: &'a mut World, rng: &'a dyn RngOracle) -> Self {
        Self {
            world,
            rng,
            policy: AiPolicy::new(),
        }
    }

    pub fn world(&self) -> &World {
        self.world
    }

    /// Description of any room, as shown to players.
    pub fn room_description(&self, key: &RoomKey) -> Result<String, LookupError> {
        crate::view::room_description(self.world, key)
    }
}
