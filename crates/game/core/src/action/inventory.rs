use crate::action::{ActionError, ActionTransition};
use crate::state::{ActorId, Inventory, InventoryError, World};

/// Take a named item from the actor's current room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickUpAction {
    pub actor: ActorId,
    pub item: String,
}

impl PickUpAction {
    pub fn new(actor: ActorId, item: impl Into<String>) -> Self {
        Self {
            actor,
            item: item.into(),
        }
    }
}

impl ActionTransition for PickUpAction {
    /// Name of the item as it was spelled in the room.
    type Output = String;

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn pre_validate(&self, world: &World) -> Result<(), ActionError> {
        let actor = world
            .actor(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?;
        if actor.inventory().is_full() {
            return Err(InventoryError::InventoryFull {
                capacity: Inventory::CAPACITY,
            }
            .into());
        }
        let in_room = world
            .map()
            .room(actor.room())
            .items()
            .iter()
            .any(|item| item.is_named(&self.item));
        if !in_room {
            return Err(InventoryError::ItemNotFound {
                item: self.item.trim().to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError> {
        let (actor, map) = world
            .actor_and_map_mut(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?;
        if actor.inventory.is_full() {
            return Err(InventoryError::InventoryFull {
                capacity: Inventory::CAPACITY,
            }
            .into());
        }
        let room = map.room_mut(actor.room());
        let item = room
            .take_item(&self.item)
            .ok_or_else(|| InventoryError::ItemNotFound {
                item: self.item.trim().to_string(),
            })?;
        let name = item.name().to_string();
        // An item that does not fit goes back to the room.
        if let Err(item) = actor.inventory.try_add(item) {
            room.add_item(item);
            return Err(InventoryError::InventoryFull {
                capacity: Inventory::CAPACITY,
            }
            .into());
        }
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RoomId;
    use crate::state::fixtures::parlor_world;

    #[test]
    fn moves_item_from_room_to_inventory() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        let action = PickUpAction::new(alice, "knife");
        action.pre_validate(&world).unwrap();
        assert_eq!(action.apply(&mut world), Ok("Knife".to_string()));
        assert!(world.map().room(RoomId(0)).items().is_empty());
        assert_eq!(world.actor(alice).unwrap().inventory().names(), vec!["Knife"]);
    }

    #[test]
    fn missing_item_is_rejected() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 1).unwrap();
        let action = PickUpAction::new(alice, "Knife");
        assert_eq!(
            action.pre_validate(&world),
            Err(ActionError::Inventory(InventoryError::ItemNotFound {
                item: "Knife".into()
            }))
        );
        assert!(action.apply(&mut world).is_err());
        assert_eq!(world.map().room(RoomId(0)).item_names(), vec!["Knife"]);
    }
}
