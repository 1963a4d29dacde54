//! One-line renderings of turns for the terminal.

use game_core::{Action, ActionResult, AttackOutcome, RoomId, TurnReport, Weapon};

/// Room names by index, captured before the engine borrows the world.
pub struct RoomNames(Vec<String>);

impl RoomNames {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self(names.into_iter().collect())
    }

    pub fn get(&self, id: RoomId) -> &str {
        self.0.get(id.index()).map_or("?", String::as_str)
    }
}

pub fn action_label(action: &Action) -> String {
    match action {
        Action::Move { to } => format!("move to {to}"),
        Action::PickUp { item } => format!("pick up {item}"),
        Action::Attack { weapon } => match weapon {
            Weapon::Default => "attack bare-handed".to_string(),
            Weapon::Named(name) => format!("attack with {name}"),
        },
        Action::Look => "look around".to_string(),
        Action::MovePet { to } => format!("move pet to {to}"),
        Action::Inspect { room } => format!("inspect {room}"),
        Action::Describe => "describe self".to_string(),
    }
}

/// What happened, in a few words.
pub fn result_label(report: &TurnReport, rooms: &RoomNames) -> String {
    let result = match &report.outcome.result {
        Ok(result) => result,
        Err(error) => return format!("failed: {error}"),
    };
    match result {
        ActionResult::Moved { to, .. } => format!("now in {}", rooms.get(*to)),
        ActionResult::PickedUp { item } => format!("took {item}"),
        ActionResult::Attack(AttackOutcome::NotInTargetRoom) => {
            "the target is elsewhere".to_string()
        }
        ActionResult::Attack(AttackOutcome::Seen { observer, .. }) => {
            format!("seen by {observer}, no damage")
        }
        ActionResult::Attack(AttackOutcome::Hit {
            damage,
            remaining,
            killed,
            ..
        }) => {
            if *killed {
                format!("hit for {damage}, the target is dead")
            } else {
                format!("hit for {damage}, {remaining} HP left")
            }
        }
        ActionResult::Looked { .. } => "looked around".to_string(),
        ActionResult::PetMoved { to } => format!("pet now in {}", rooms.get(*to)),
        ActionResult::Inspected { .. } => "inspected".to_string(),
        ActionResult::Described { summary } => summary.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_name_the_weapon() {
        assert_eq!(action_label(&Action::attack("Knife")), "attack with Knife");
        assert_eq!(action_label(&Action::attack("default")), "attack bare-handed");
        assert_eq!(action_label(&Action::move_to("Kitchen")), "move to Kitchen");
    }

    #[test]
    fn unknown_room_renders_as_placeholder() {
        let rooms = RoomNames::new(["Parlor".to_string()]);
        assert_eq!(rooms.get(RoomId(0)), "Parlor");
        assert_eq!(rooms.get(RoomId(4)), "?");
    }
}
