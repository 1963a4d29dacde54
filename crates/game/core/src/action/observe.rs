//! Observation actions. None of them change the world.

use crate::action::{ActionError, ActionTransition};
use crate::map::RoomKey;
use crate::state::{ActorId, World};
use crate::view;

/// Describe the actor's current room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookAction {
    pub actor: ActorId,
}

impl LookAction {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for LookAction {
    type Output = String;

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError> {
        let room = world
            .actor(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?
            .room();
        Ok(view::describe_room(world, room))
    }
}

/// Describe any room by index or name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectAction {
    pub actor: ActorId,
    pub room: RoomKey,
}

impl InspectAction {
    pub fn new(actor: ActorId, room: RoomKey) -> Self {
        Self { actor, room }
    }
}

impl ActionTransition for InspectAction {
    type Output = String;

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError> {
        Ok(view::room_description(world, &self.room)?)
    }
}

/// Show the actor's location and inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DescribeAction {
    pub actor: ActorId,
}

impl DescribeAction {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for DescribeAction {
    type Output = String;

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError> {
        view::describe_actor(world, self.actor).ok_or(ActionError::UnknownActor(self.actor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::parlor_world;

    #[test]
    fn look_describes_current_room() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 1).unwrap();
        let text = LookAction::new(alice).apply(&mut world).unwrap();
        assert!(text.starts_with("Space: Kitchen\n"));
    }

    #[test]
    fn inspect_unknown_room_fails() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 1).unwrap();
        let result = InspectAction::new(alice, RoomKey::from("Attic")).apply(&mut world);
        assert!(matches!(result, Err(ActionError::Lookup(_))));
    }
}
