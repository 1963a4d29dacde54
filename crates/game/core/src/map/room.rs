use crate::state::Item;

/// Index of a room inside its [`SpatialMap`](super::SpatialMap).
///
/// Rooms are never created or destroyed after load, so the index is a stable
/// handle for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub usize);

impl RoomId {
    pub const FIRST: Self = Self(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for RoomId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bounding rectangle of a room in grid coordinates (inclusive corners).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub upper_row: i32,
    pub upper_col: i32,
    pub lower_row: i32,
    pub lower_col: i32,
}

impl Rect {
    pub const fn new(upper_row: i32, upper_col: i32, lower_row: i32, lower_col: i32) -> Self {
        Self {
            upper_row,
            upper_col,
            lower_row,
            lower_col,
        }
    }

    /// Two rooms touch when one's row edge is within one unit of the other's
    /// opposite row edge while their column ranges overlap, or the same with
    /// rows and columns swapped.
    pub fn touches(&self, other: &Rect) -> bool {
        let rows_touch = (self.lower_row - other.upper_row).abs() <= 1
            || (other.lower_row - self.upper_row).abs() <= 1;
        let cols_touch = (self.lower_col - other.upper_col).abs() <= 1
            || (other.lower_col - self.upper_col).abs() <= 1;

        let horizontally = rows_touch
            && ranges_overlap(self.upper_col, self.lower_col, other.upper_col, other.lower_col);
        let vertically = cols_touch
            && ranges_overlap(self.upper_row, self.lower_row, other.upper_row, other.lower_row);

        horizontally || vertically
    }

    /// Center point scaled by two so that it stays integral.
    #[inline]
    pub fn doubled_center(&self) -> (i64, i64) {
        (
            i64::from(self.upper_row) + i64::from(self.lower_row),
            i64::from(self.upper_col) + i64::from(self.lower_col),
        )
    }

    /// Manhattan distance between the centers of two rectangles, in half cells.
    pub fn center_distance(&self, other: &Rect) -> u64 {
        let (ar, ac) = self.doubled_center();
        let (br, bc) = other.doubled_center();
        ar.abs_diff(br) + ac.abs_diff(bc)
    }
}

#[inline]
fn ranges_overlap(start1: i32, end1: i32, start2: i32, end2: i32) -> bool {
    !(end1 < start2 || end2 < start1)
}

/// A rectangular cell of the map.
///
/// Geometry and neighbors are fixed at load time; only the item list changes
/// during play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    name: String,
    rect: Rect,
    neighbors: Vec<RoomId>,
    items: Vec<Item>,
}

impl Room {
    pub(crate) fn new(id: RoomId, name: String, rect: Rect) -> Self {
        Self {
            id,
            name,
            rect,
            neighbors: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Neighboring rooms in ascending index order.
    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    pub fn has_neighbor(&self, other: RoomId) -> bool {
        self.neighbors.contains(&other)
    }

    pub(crate) fn add_neighbor(&mut self, other: RoomId) {
        if !self.neighbors.contains(&other) {
            self.neighbors.push(other);
        }
    }

    pub(crate) fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes and returns the first item whose name matches, case-insensitively.
    pub(crate) fn take_item(&mut self, name: &str) -> Option<Item> {
        let position = self.items.iter().position(|item| item.is_named(name))?;
        Some(self.items.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_by_side_rooms_touch() {
        let left = Rect::new(0, 0, 4, 4);
        let right = Rect::new(0, 5, 4, 9);
        assert!(left.touches(&right));
        assert!(right.touches(&left));
    }

    #[test]
    fn stacked_rooms_touch() {
        let top = Rect::new(0, 0, 3, 5);
        let bottom = Rect::new(4, 2, 8, 6);
        assert!(top.touches(&bottom));
    }

    #[test]
    fn distant_rooms_do_not_touch() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(10, 10, 12, 12);
        assert!(!a.touches(&b));
    }

    #[test]
    fn aligned_edge_without_overlap_does_not_touch() {
        // Row edges line up, but the column ranges are far apart.
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(4, 10, 6, 12);
        assert!(!a.touches(&b));
    }

    #[test]
    fn center_distance_is_symmetric() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(3, 5, 5, 9);
        assert_eq!(a.center_distance(&b), b.center_distance(&a));
        assert_eq!(a.center_distance(&a), 0);
    }
}
