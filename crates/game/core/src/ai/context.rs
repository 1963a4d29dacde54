use crate::action::Action;
use crate::map::RoomId;
use crate::rng::{RngOracle, compute_seed};
use crate::state::{Actor, ActorId, World};

/// Blackboard for one AI decision.
///
/// Holds read-only access to the world, the injected randomness and the
/// action chosen so far. Only the first action set is kept.
pub struct PolicyContext<'a> {
    pub actor: ActorId,
    pub world: &'a World,
    rng: &'a dyn RngOracle,
    /// Decision counter of the deciding actor, mixed into every seed.
    nonce: u64,
    action: Option<Action>,
}

impl<'a> PolicyContext<'a> {
    pub fn new(actor: ActorId, world: &'a World, rng: &'a dyn RngOracle, nonce: u64) -> Self {
        Self {
            actor,
            world,
            rng,
            nonce,
            action: None,
        }
    }

    pub fn me(&self) -> Option<&'a Actor> {
        self.world.actor(self.actor)
    }

    pub fn my_room(&self) -> Option<RoomId> {
        self.me().map(Actor::room)
    }

    /// Deterministic index in `0..len` for roll number `context`.
    pub fn pick(&self, context: u32, len: usize) -> Option<usize> {
        let seed = compute_seed(
            self.world.config().game_seed,
            self.nonce,
            self.actor.index(),
            context,
        );
        self.rng.pick_index(seed, len)
    }

    pub fn set_action(&mut self, action: Action) {
        if let Some(existing) = &self.action {
            tracing::warn!(
                actor = self.actor.index(),
                kept = ?existing.kind(),
                dropped = ?action.kind(),
                "more than one action chosen in a single decision"
            );
            return;
        }
        self.action = Some(action);
    }

    pub fn take_action(&mut self) -> Option<Action> {
        self.action.take()
    }
}
