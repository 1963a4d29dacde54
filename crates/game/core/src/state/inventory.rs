//! Inventory system for actors.
//!
//! Capacity is part of the type: an [`Inventory`] can never hold more than
//! [`GameConfig::MAX_INVENTORY_SLOTS`] items.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Item;

/// Errors raised by pickup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("item '{item}' not found in this room")]
    ItemNotFound { item: String },

    #[error("inventory is full ({capacity} items), cannot pick up more")]
    InventoryFull { capacity: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound { .. } => ErrorSeverity::Validation,
            Self::InventoryFull { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound { .. } => "INVENTORY_ITEM_NOT_FOUND",
            Self::InventoryFull { .. } => "INVENTORY_FULL",
        }
    }
}

/// Ordered, bounded collection of items carried by an actor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub const CAPACITY: usize = GameConfig::MAX_INVENTORY_SLOTS;

    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.is_named(name))
    }

    /// Appends an item, handing it back if there is no free slot.
    pub fn try_add(&mut self, item: Item) -> Result<(), Item> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes and returns the first item with a matching name.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        let position = self.items.iter().position(|item| item.is_named(name))?;
        Some(self.items.remove(position))
    }

    /// Item with the strictly highest damage; the earliest one wins ties.
    pub fn strongest(&self) -> Option<&Item> {
        self.items.iter().fold(None, |best: Option<&Item>, item| match best {
            Some(current) if current.damage() >= item.damage() => Some(current),
            _ => Some(item),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RoomId;

    fn item(name: &str, damage: u32) -> Item {
        Item::new(name, damage, RoomId::FIRST)
    }

    #[test]
    fn refuses_sixth_item() {
        let mut inventory = Inventory::empty();
        for i in 0..Inventory::CAPACITY {
            inventory.try_add(item(&format!("Item{i}"), 1)).unwrap();
        }
        assert!(inventory.is_full());

        let rejected = inventory.try_add(item("Extra", 9)).unwrap_err();
        assert_eq!(rejected.name(), "Extra");
        assert_eq!(inventory.len(), Inventory::CAPACITY);
    }

    #[test]
    fn take_is_case_insensitive() {
        let mut inventory = Inventory::empty();
        inventory.try_add(item("Revolver", 3)).unwrap();
        let taken = inventory.take("revolver").unwrap();
        assert_eq!(taken.name(), "Revolver");
        assert!(inventory.is_empty());
    }

    #[test]
    fn strongest_prefers_first_on_ties() {
        let mut inventory = Inventory::empty();
        inventory.try_add(item("Pan", 2)).unwrap();
        inventory.try_add(item("Axe", 7)).unwrap();
        inventory.try_add(item("Saw", 7)).unwrap();
        assert_eq!(inventory.strongest().unwrap().name(), "Axe");
    }

    #[test]
    fn strongest_of_empty_is_none() {
        assert!(Inventory::empty().strongest().is_none());
    }
}
