//! Action kind enumeration and turn-consumption policy.

use crate::config::GameConfig;

/// Types of actions an actor can take.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    /// Walk into a neighboring room.
    Move,
    /// Take an item from the current room.
    PickUp,
    /// Try to damage the target.
    Attack,
    /// Describe the current room.
    Look,
    /// Send the roaming entity to a chosen room.
    MovePet,
    /// Describe any room.
    Inspect,
    /// Show the actor's own location and inventory.
    Describe,
}

impl ActionKind {
    /// Whether resolving this kind of action ends the actor's turn.
    ///
    /// Decided per kind, never by whether the action succeeded.
    pub fn consumes_turn(self, config: &GameConfig) -> bool {
        match self {
            Self::Move | Self::PickUp | Self::Attack | Self::MovePet => true,
            Self::Look => config.look_consumes_turn,
            Self::Inspect | Self::Describe => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_are_snake_case() {
        assert_eq!(ActionKind::PickUp.as_ref(), "pick_up");
        assert_eq!("move_pet".parse::<ActionKind>(), Ok(ActionKind::MovePet));
        assert_eq!("ATTACK".parse::<ActionKind>(), Ok(ActionKind::Attack));
    }

    #[test]
    fn look_follows_config() {
        let config = GameConfig::default();
        assert!(ActionKind::Look.consumes_turn(&config));
        let free_look = config.with_look_consuming_turn(false);
        assert!(!ActionKind::Look.consumes_turn(&free_look));
    }

    #[test]
    fn only_queries_are_free() {
        let config = GameConfig::default();
        let free: Vec<_> = ActionKind::iter()
            .filter(|kind| !kind.consumes_turn(&config))
            .collect();
        assert_eq!(free, vec![ActionKind::Inspect, ActionKind::Describe]);
    }
}
