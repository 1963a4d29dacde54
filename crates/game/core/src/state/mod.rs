//! Authoritative game state representation.
//!
//! [`World`] owns every piece of mutable state: the map (with room items), the
//! actors in turn order, the target, the roaming entity and turn bookkeeping.
//! Adapters read it freely but mutate it only through the engine.
mod actor;
mod error;
mod inventory;
mod item;
mod pet;
mod setup;
mod target;
mod turn;

pub use actor::{Actor, ActorId, Controller};
pub use error::InitializationError;
pub use inventory::{Inventory, InventoryError};
pub use item::Item;
pub use pet::{RoamingEntity, traversal_order};
pub use setup::{ItemSpec, RoomSpec, TargetSpec, WorldSpec};
pub use target::TargetState;
pub use turn::{TurnPhase, TurnState};

use crate::config::GameConfig;
use crate::map::{LookupError, RoomId, SpatialMap};

/// Canonical state of one game.
///
/// Loading a new map builds a new `World`; nothing is shared between games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    name: String,
    map: SpatialMap,
    actors: Vec<Actor>,
    target: TargetState,
    pet: RoamingEntity,
    pub(crate) turn: TurnState,
    winner: Option<String>,
    last_attacker: Option<String>,
    config: GameConfig,
}

impl World {
    /// Validates a parsed map description and builds a fresh world.
    ///
    /// The target starts in `spec.target.start`, the roaming entity in the
    /// first room, and every item in the room its index names.
    pub fn from_spec(spec: WorldSpec, config: GameConfig) -> Result<Self, InitializationError> {
        let WorldSpec {
            name,
            dimensions,
            target,
            pet_name,
            rooms,
            items,
        } = spec;

        if target.health == 0 {
            return Err(InitializationError::DeadTarget { name: target.name });
        }

        let mut map = SpatialMap::new(
            dimensions,
            rooms.into_iter().map(|room| (room.name, room.rect)),
        )?;

        let target_room = checked_room(&map, target.start, || format!("target '{}'", target.name))?;

        for item in items {
            let room = checked_room(&map, item.room, || format!("item '{}'", item.name))?;
            map.room_mut(room)
                .add_item(Item::new(item.name, item.damage, room));
        }

        let pet = RoamingEntity::new(pet_name, &map);

        tracing::debug!(
            world = %name,
            rooms = map.len(),
            pet_path = pet.path().len(),
            "world initialized"
        );

        Ok(Self {
            name,
            map,
            actors: Vec::new(),
            target: TargetState::new(target.name, target.health, target_room),
            pet,
            turn: TurnState::new(),
            winner: None,
            last_attacker: None,
            config,
        })
    }

    /// Seats a new actor at the end of the turn order.
    ///
    /// Names are identity keys: blank or already-used names (case-insensitive)
    /// are rejected, as is a start index outside the room list.
    pub fn add_actor(
        &mut self,
        name: &str,
        start: usize,
        controller: Controller,
    ) -> Result<ActorId, InitializationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InitializationError::EmptyActorName);
        }
        if self.actors.iter().any(|actor| actor.is_named(name)) {
            return Err(InitializationError::DuplicateActor {
                name: name.to_string(),
            });
        }
        let room = checked_room(&self.map, start, || format!("actor '{name}'"))?;

        let id = ActorId(self.actors.len());
        self.actors
            .push(Actor::new(id, name.to_string(), room, controller));
        tracing::debug!(actor = name, room = self.map.name(room), "actor added");
        Ok(id)
    }

    pub fn add_human(&mut self, name: &str, start: usize) -> Result<ActorId, InitializationError> {
        self.add_actor(name, start, Controller::Human)
    }

    pub fn add_ai(&mut self, name: &str, start: usize) -> Result<ActorId, InitializationError> {
        self.add_actor(name, start, Controller::ai())
    }

    // ===== read access =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map(&self) -> &SpatialMap {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.index())
    }

    /// Case-insensitive lookup by actor name.
    pub fn actor_by_name(&self, name: &str) -> Result<ActorId, LookupError> {
        self.actors
            .iter()
            .find(|actor| actor.is_named(name))
            .map(Actor::id)
            .ok_or_else(|| LookupError::UnknownActor {
                name: name.trim().to_string(),
            })
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    pub fn pet(&self) -> &RoamingEntity {
        &self.pet
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Name of the actor whose attack brought the target's health to zero.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Name of the actor who most recently damaged the target.
    pub fn last_attacker(&self) -> Option<&str> {
        self.last_attacker.as_deref()
    }

    pub fn room_has_pet(&self, room: RoomId) -> bool {
        self.pet.occupies(room)
    }

    /// Whether `observer` can see `subject`: same room or a neighboring room.
    ///
    /// The roaming entity does not block this check; it only hides a room's
    /// contents in descriptions.
    pub fn can_see(&self, observer: ActorId, subject: ActorId) -> bool {
        match (self.actor(observer), self.actor(subject)) {
            (Some(a), Some(b)) => self.map.in_sight(a.room(), b.room()),
            _ => false,
        }
    }

    /// First other actor, in turn order, that can see `subject`.
    pub fn observer_of(&self, subject: ActorId) -> Option<ActorId> {
        self.actors
            .iter()
            .map(Actor::id)
            .filter(|&id| id != subject)
            .find(|&id| self.can_see(id, subject))
    }

    pub fn actors_in(&self, room: RoomId) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.iter().filter(move |actor| actor.room() == room)
    }

    // ===== mutation (engine only) =====

    pub(crate) fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.index())
    }

    /// Splits the borrow so an actor and the room map can change together.
    pub(crate) fn actor_and_map_mut(
        &mut self,
        id: ActorId,
    ) -> Option<(&mut Actor, &mut SpatialMap)> {
        let actor = self.actors.get_mut(id.index())?;
        Some((actor, &mut self.map))
    }

    pub(crate) fn advance_target(&mut self) -> RoomId {
        self.target.advance(&self.map)
    }

    pub(crate) fn advance_pet(&mut self) -> RoomId {
        self.pet.advance()
    }

    pub(crate) fn relocate_pet(&mut self, room: RoomId) {
        self.pet.relocate(room);
    }

    /// Applies damage on behalf of `attacker` and returns the remaining health.
    ///
    /// Records the attacker. The winner is set only by the blow that brings
    /// health to zero and never changes afterwards.
    pub(crate) fn damage_target(&mut self, attacker: &str, damage: u32) -> u32 {
        let was_alive = !self.target.is_dead();
        let remaining = self.target.apply_damage(damage);
        self.last_attacker = Some(attacker.to_string());
        if was_alive && remaining == 0 && self.winner.is_none() {
            self.winner = Some(attacker.to_string());
        }
        remaining
    }

    #[cfg(test)]
    pub(crate) fn target_mut(&mut self) -> &mut TargetState {
        &mut self.target
    }
}

fn checked_room(
    map: &SpatialMap,
    index: usize,
    subject: impl FnOnce() -> String,
) -> Result<RoomId, InitializationError> {
    map.room_at(index)
        .map_err(|_| InitializationError::InvalidRoomIndex {
            subject: subject(),
            index,
            len: map.len(),
        })
}
