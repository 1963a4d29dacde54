//! The roaming entity and its precomputed wandering path.

use crate::map::{RoomId, SpatialMap};

/// A wanderer that blocks the view into whatever room it occupies.
///
/// The path is a depth-first preorder over the adjacency graph rooted at the
/// first loaded room. It is computed once and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoamingEntity {
    name: String,
    room: RoomId,
    path: Vec<RoomId>,
    cursor: usize,
}

impl RoamingEntity {
    /// Places the entity at the root of its path.
    pub fn new(name: impl Into<String>, map: &SpatialMap) -> Self {
        let path = traversal_order(map, RoomId::FIRST);
        Self {
            name: name.into(),
            room: RoomId::FIRST,
            path,
            cursor: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn path(&self) -> &[RoomId] {
        &self.path
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn occupies(&self, room: RoomId) -> bool {
        self.room == room
    }

    /// Steps to the next room on the path, wrapping at the end.
    pub(crate) fn advance(&mut self) -> RoomId {
        if self.path.is_empty() {
            return self.room;
        }
        self.cursor = (self.cursor + 1) % self.path.len();
        self.room = self.path[self.cursor];
        self.room
    }

    /// Moves directly to `room`. The path cursor is left where it was.
    pub(crate) fn relocate(&mut self, room: RoomId) {
        self.room = room;
    }
}

/// Depth-first preorder from `root`, following neighbor lists in order.
///
/// Equivalent to the recursive form: visit, then recurse into each unvisited
/// neighbor. Rooms unreachable from `root` are not part of the result.
pub fn traversal_order(map: &SpatialMap, root: RoomId) -> Vec<RoomId> {
    let mut visited = vec![false; map.len()];
    let mut order = Vec::with_capacity(map.len());
    if root.index() >= map.len() {
        return order;
    }

    // Each frame is (room, index of the next neighbor to try).
    let mut stack: Vec<(RoomId, usize)> = vec![(root, 0)];
    visited[root.index()] = true;
    order.push(root);

    while let Some(frame) = stack.last_mut() {
        let (room, next) = *frame;
        let neighbors = map.neighbors(room);
        match neighbors.get(next) {
            Some(&neighbor) => {
                frame.1 += 1;
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    order.push(neighbor);
                    stack.push((neighbor, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}
