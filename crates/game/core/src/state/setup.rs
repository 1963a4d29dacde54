//! Plain descriptions of a world as produced by a loader.
//!
//! These carry no invariants of their own; [`World::from_spec`](super::World::from_spec)
//! validates them.

use crate::map::{MapDimensions, Rect};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSpec {
    pub name: String,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    /// Index of the room the item starts in.
    pub room: usize,
    pub damage: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSpec {
    pub name: String,
    pub health: u32,
    /// Index of the starting room.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: usize,
}

/// Parsed map: grid size, named entities, rooms and items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSpec {
    pub name: String,
    pub dimensions: MapDimensions,
    pub target: TargetSpec,
    pub pet_name: String,
    pub rooms: Vec<RoomSpec>,
    pub items: Vec<ItemSpec>,
}
