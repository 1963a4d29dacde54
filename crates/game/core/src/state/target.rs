use crate::map::{RoomId, SpatialMap};

/// The pursued entity.
///
/// Owned by the [`World`](super::World); a fresh one is built for every game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetState {
    name: String,
    health: u32,
    room: RoomId,
}

impl TargetState {
    pub fn new(name: impl Into<String>, health: u32, room: RoomId) -> Self {
        Self {
            name: name.into(),
            health,
            room,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Subtracts damage, flooring at zero. Returns the remaining health.
    pub(crate) fn apply_damage(&mut self, damage: u32) -> u32 {
        self.health = self.health.saturating_sub(damage);
        self.health
    }

    /// Moves to the next room in load order, ignoring adjacency.
    pub(crate) fn advance(&mut self, map: &SpatialMap) -> RoomId {
        self.room = map.next_in_order(self.room);
        self.room
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, room: RoomId) {
        self.room = room;
    }
}
