//! Actors: the participants trying to reach the target unobserved.

use crate::ai::PolicyState;
use crate::map::RoomId;
use crate::state::Inventory;

/// Position of an actor in the turn rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub usize);

impl ActorId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Who decides the actor's actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Controller {
    /// Driven by an external input adapter.
    Human,
    /// Driven by the built-in deterministic policy.
    Ai(PolicyState),
}

impl Controller {
    pub fn ai() -> Self {
        Self::Ai(PolicyState::default())
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Self::Ai(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    id: ActorId,
    name: String,
    room: RoomId,
    pub(crate) inventory: Inventory,
    pub(crate) controller: Controller,
}

impl Actor {
    pub(crate) fn new(id: ActorId, name: String, room: RoomId, controller: Controller) -> Self {
        Self {
            id,
            name,
            room,
            inventory: Inventory::empty(),
            controller,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn is_ai(&self) -> bool {
        self.controller.is_ai()
    }

    /// Names are the identity key and compare case-insensitively.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    pub(crate) fn set_room(&mut self, room: RoomId) {
        self.room = room;
    }
}
