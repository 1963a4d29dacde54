use crate::action::{ActionError, ActionTransition, MoveError};
use crate::map::{RoomId, RoomKey};
use crate::state::{ActorId, World};

/// Step into a neighboring room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: ActorId,
    pub to: RoomKey,
}

impl MoveAction {
    pub fn new(actor: ActorId, to: RoomKey) -> Self {
        Self { actor, to }
    }

    fn route(&self, world: &World) -> Result<(RoomId, RoomId), ActionError> {
        let from = world
            .actor(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?
            .room();
        let to = world.map().resolve(&self.to)?;
        Ok((from, to))
    }
}

impl ActionTransition for MoveAction {
    /// `(from, to)`
    type Output = (RoomId, RoomId);

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn pre_validate(&self, world: &World) -> Result<(), ActionError> {
        let (from, to) = self.route(world)?;
        if !world.map().is_adjacent(from, to) {
            return Err(MoveError::NotAdjacent {
                from: world.map().name(from).to_string(),
                to: world.map().name(to).to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError> {
        let (from, to) = self.route(world)?;
        let actor = world
            .actor_mut(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?;
        actor.set_room(to);
        Ok((from, to))
    }
}

/// Send the roaming entity to any room.
///
/// Its wandering path position is unchanged, so the next automatic step
/// continues from where the path left off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePetAction {
    pub actor: ActorId,
    pub to: RoomKey,
}

impl MovePetAction {
    pub fn new(actor: ActorId, to: RoomKey) -> Self {
        Self { actor, to }
    }
}

impl ActionTransition for MovePetAction {
    type Output = RoomId;

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError> {
        let to = world.map().resolve(&self.to)?;
        world.relocate_pet(to);
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::parlor_world;

    #[test]
    fn moves_to_neighbor_by_name() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        let action = MoveAction::new(alice, RoomKey::from("kitchen"));
        action.pre_validate(&world).unwrap();
        assert_eq!(action.apply(&mut world), Ok((RoomId(0), RoomId(1))));
        assert_eq!(world.actor(alice).unwrap().room(), RoomId(1));
    }

    #[test]
    fn rejects_distant_room() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        let action = MoveAction::new(alice, RoomKey::from("Cellar"));
        assert!(matches!(
            action.pre_validate(&world),
            Err(ActionError::Move(MoveError::NotAdjacent { .. }))
        ));
    }

    #[test]
    fn rejects_own_room() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        let action = MoveAction::new(alice, RoomKey::from("Parlor"));
        assert!(action.pre_validate(&world).is_err());
    }

    #[test]
    fn unknown_room_name_is_a_lookup_error() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        let action = MoveAction::new(alice, RoomKey::from("Attic"));
        assert!(matches!(
            action.pre_validate(&world),
            Err(ActionError::Lookup(_))
        ));
    }

    #[test]
    fn pet_can_be_sent_anywhere() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        let action = MovePetAction::new(alice, RoomKey::from("cellar"));
        assert_eq!(action.apply(&mut world), Ok(RoomId(2)));
        assert!(world.room_has_pet(RoomId(2)));
        assert!(!world.room_has_pet(RoomId(0)));
    }
}
