//! Damage-bearing items.

use crate::map::RoomId;

/// An object that can be picked up and spent on an attack.
///
/// Items are immutable. Ownership moves from a room's item list into an
/// actor's inventory on pickup and ends when the item is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    damage: u32,
    origin: RoomId,
}

impl Item {
    pub fn new(name: impl Into<String>, damage: u32, origin: RoomId) -> Self {
        Self {
            name: name.into(),
            damage,
            origin,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Room the item was placed in when the map was loaded.
    pub fn origin(&self) -> RoomId {
        self.origin
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (Damage: {})", self.name, self.damage)
    }
}
