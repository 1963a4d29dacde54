//! Spatial map: rooms and their derived adjacency graph.
//!
//! The map is built once from a list of named rectangles. Adjacency is never
//! declared by content; it is derived from geometry at construction time and
//! stored symmetrically on both rooms. All other components refer to rooms by
//! [`RoomId`] and never hold copies of a [`Room`].
mod room;

pub use room::{Rect, Room, RoomId};

use crate::error::{ErrorSeverity, GameError};
use crate::state::InitializationError;

/// Grid size the rooms are laid out on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl MapDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

/// Errors raised while resolving a room by name or index.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("room '{name}' not found")]
    NotFound { name: String },

    #[error("room index {index} is out of range (map has {len} rooms)")]
    InvalidIndex { index: usize, len: usize },

    #[error("no actor named '{name}'")]
    UnknownActor { name: String },
}

impl GameError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "LOOKUP_NOT_FOUND",
            Self::InvalidIndex { .. } => "LOOKUP_INVALID_INDEX",
            Self::UnknownActor { .. } => "LOOKUP_UNKNOWN_ACTOR",
        }
    }
}

/// How an adapter refers to a room: by load-order index or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomKey {
    Index(usize),
    Name(String),
}

impl From<usize> for RoomKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<RoomId> for RoomKey {
    fn from(id: RoomId) -> Self {
        Self::Index(id.index())
    }
}

impl From<&str> for RoomKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for RoomKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl core::fmt::Display for RoomKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Immutable-geometry set of rooms plus their neighbor relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpatialMap {
    dimensions: MapDimensions,
    rooms: Vec<Room>,
}

impl SpatialMap {
    /// Builds the map and derives adjacency for every unordered pair of rooms.
    ///
    /// Room names are identity keys and must be unique (case-insensitive).
    pub fn new<I, S>(dimensions: MapDimensions, rooms: I) -> Result<Self, InitializationError>
    where
        I: IntoIterator<Item = (S, Rect)>,
        S: Into<String>,
    {
        let mut built: Vec<Room> = Vec::new();
        for (index, (name, rect)) in rooms.into_iter().enumerate() {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                return Err(InitializationError::UnnamedRoom { index });
            }
            if built.iter().any(|room| room.is_named(&name)) {
                return Err(InitializationError::DuplicateRoom { name });
            }
            built.push(Room::new(RoomId(index), name, rect));
        }

        if built.is_empty() {
            return Err(InitializationError::EmptyMap);
        }

        let mut map = Self {
            dimensions,
            rooms: built,
        };
        map.establish_neighbors();
        Ok(map)
    }

    fn establish_neighbors(&mut self) {
        let len = self.rooms.len();
        for i in 0..len {
            for j in (i + 1)..len {
                if self.rooms[i].rect().touches(self.rooms[j].rect()) {
                    self.rooms[i].add_neighbor(RoomId(j));
                    self.rooms[j].add_neighbor(RoomId(i));
                }
            }
        }
        // Pairs are visited in (i, j) order, so every neighbor list ends up
        // sorted by index. Traversal order of the roaming entity depends on it.
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.iter().map(Room::id)
    }

    /// Returns the room for a known id.
    ///
    /// Ids handed out by this map are always valid; use [`Self::room_at`] for
    /// indices coming from outside.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    /// Resolves an externally supplied index.
    pub fn room_at(&self, index: usize) -> Result<RoomId, LookupError> {
        if index < self.rooms.len() {
            Ok(RoomId(index))
        } else {
            Err(LookupError::InvalidIndex {
                index,
                len: self.rooms.len(),
            })
        }
    }

    /// Case-insensitive lookup by room name.
    ///
    /// A miss is an error; there is no fallback room.
    pub fn room_by_name(&self, name: &str) -> Result<RoomId, LookupError> {
        self.rooms
            .iter()
            .find(|room| room.is_named(name))
            .map(Room::id)
            .ok_or_else(|| LookupError::NotFound {
                name: name.trim().to_string(),
            })
    }

    pub fn resolve(&self, key: &RoomKey) -> Result<RoomId, LookupError> {
        match key {
            RoomKey::Index(index) => self.room_at(*index),
            RoomKey::Name(name) => self.room_by_name(name),
        }
    }

    pub fn name(&self, id: RoomId) -> &str {
        self.room(id).name()
    }

    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        self.room(id).neighbors()
    }

    pub fn is_adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.room(a).has_neighbor(b)
    }

    /// Same room or a neighbor: the line-of-sight rule between actors.
    pub fn in_sight(&self, a: RoomId, b: RoomId) -> bool {
        a == b || self.is_adjacent(a, b)
    }

    /// Manhattan distance between room centers, in half cells.
    pub fn center_distance(&self, a: RoomId, b: RoomId) -> u64 {
        self.room(a).rect().center_distance(self.room(b).rect())
    }

    /// Room following `id` in load order, wrapping around at the end.
    pub fn next_in_order(&self, id: RoomId) -> RoomId {
        RoomId((id.index() + 1) % self.rooms.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rooms() -> SpatialMap {
        SpatialMap::new(
            MapDimensions::new(3, 3),
            [
                ("Room1", Rect::new(0, 0, 1, 1)),
                ("Room2", Rect::new(0, 1, 1, 2)),
                ("Room3", Rect::new(1, 0, 2, 1)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn adjacency_is_symmetric() {
        let map = three_rooms();
        for a in map.room_ids() {
            for b in map.room_ids() {
                assert_eq!(map.is_adjacent(a, b), map.is_adjacent(b, a));
            }
        }
    }

    #[test]
    fn room_is_not_its_own_neighbor() {
        let map = three_rooms();
        for id in map.room_ids() {
            assert!(!map.is_adjacent(id, id));
        }
    }

    #[test]
    fn neighbors_are_in_index_order() {
        let map = three_rooms();
        assert_eq!(map.neighbors(RoomId(0)), &[RoomId(1), RoomId(2)]);
        assert_eq!(map.neighbors(RoomId(2)), &[RoomId(0), RoomId(1)]);
    }

    #[test]
    fn lookup_by_name_ignores_case() {
        let map = three_rooms();
        assert_eq!(map.room_by_name("room2"), Ok(RoomId(1)));
        assert_eq!(map.room_by_name("  ROOM3 "), Ok(RoomId(2)));
    }

    #[test]
    fn lookup_miss_is_an_error() {
        let map = three_rooms();
        assert_eq!(
            map.room_by_name("Attic"),
            Err(LookupError::NotFound {
                name: "Attic".to_string()
            })
        );
    }

    #[test]
    fn index_out_of_range_is_rejected() {
        let map = three_rooms();
        assert_eq!(map.room_at(2), Ok(RoomId(2)));
        assert_eq!(
            map.room_at(3),
            Err(LookupError::InvalidIndex { index: 3, len: 3 })
        );
    }

    #[test]
    fn resolve_accepts_index_or_name() {
        let map = three_rooms();
        assert_eq!(map.resolve(&RoomKey::from(1)), Ok(RoomId(1)));
        assert_eq!(map.resolve(&RoomKey::from("room3")), Ok(RoomId(2)));
        assert!(map.resolve(&RoomKey::from(9)).is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = SpatialMap::new(
            MapDimensions::new(2, 2),
            [("Hall", Rect::new(0, 0, 1, 1)), ("hall", Rect::new(1, 1, 2, 2))],
        );
        assert!(matches!(
            result,
            Err(InitializationError::DuplicateRoom { .. })
        ));
    }

    #[test]
    fn empty_map_is_rejected() {
        let rooms: Vec<(String, Rect)> = Vec::new();
        assert_eq!(
            SpatialMap::new(MapDimensions::default(), rooms),
            Err(InitializationError::EmptyMap)
        );
    }

    #[test]
    fn next_in_order_wraps() {
        let map = three_rooms();
        assert_eq!(map.next_in_order(RoomId(0)), RoomId(1));
        assert_eq!(map.next_in_order(RoomId(2)), RoomId(0));
    }
}
