//! Read-only text renderings of world state for adapters.
//!
//! Nothing here mutates the [`World`]; the engine calls these to fill in the
//! results of observation actions, and front ends call them directly.

use core::fmt::Write;

use crate::map::{LookupError, RoomId, RoomKey};
use crate::state::{Actor, ActorId, World};

/// Renders a list the way the game prints it: `[a, b, c]`.
pub fn bracketed<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Full description of one room: items, occupants, coordinates and what can
/// be seen of each neighbor.
///
/// A neighbor holding the roaming entity is listed as not visible.
pub fn room_description(world: &World, key: &RoomKey) -> Result<String, LookupError> {
    let id = world.map().resolve(key)?;
    Ok(describe_room(world, id))
}

pub(crate) fn describe_room(world: &World, id: RoomId) -> String {
    let map = world.map();
    let room = map.room(id);
    let rect = room.rect();
    let mut out = String::new();

    let _ = writeln!(out, "Space: {}", room.name());
    let _ = writeln!(out, "Items: {}", bracketed(room.item_names()));
    let _ = writeln!(
        out,
        "Players Present: {}",
        bracketed(world.actors_in(id).map(Actor::name))
    );
    if world.room_has_pet(id) {
        let _ = writeln!(out, "Also present: {}", world.pet().name());
    }
    let _ = writeln!(
        out,
        "Coordinates: [{}, {}] to [{}, {}]",
        rect.upper_row, rect.upper_col, rect.lower_row, rect.lower_col
    );
    out.push_str("--- Visible Neighboring Spaces ---\n");
    for &neighbor in room.neighbors() {
        let other = map.room(neighbor);
        if world.room_has_pet(neighbor) {
            let _ = writeln!(out, "{} (Not visible)", other.name());
        } else {
            let _ = writeln!(
                out,
                "{} (Items: {})",
                other.name(),
                bracketed(other.item_names())
            );
        }
    }
    out
}

/// One-line summary of a room by load-order index.
pub fn room_summary(world: &World, index: usize) -> Result<String, LookupError> {
    let id = world.map().room_at(index)?;
    let room = world.map().room(id);
    let rect = room.rect();
    Ok(format!(
        "{}: (Row {}, Col {}) - (Row {}, Col {})",
        room.name(),
        rect.upper_row,
        rect.upper_col,
        rect.lower_row,
        rect.lower_col
    ))
}

pub fn target_view(world: &World) -> String {
    let target = world.target();
    format!(
        "{} ({} HP) at {}",
        target.name(),
        target.health(),
        world.map().name(target.room())
    )
}

/// `<name> @ <room>    Items: [..]`
pub fn describe_actor(world: &World, id: ActorId) -> Option<String> {
    let actor = world.actor(id)?;
    Some(format!(
        "{} @ {}    Items: {}",
        actor.name(),
        world.map().name(actor.room()),
        bracketed(actor.inventory().names())
    ))
}

/// Every item currently carried, in actor order.
pub fn all_actor_items(world: &World) -> Vec<String> {
    world
        .actors()
        .iter()
        .flat_map(|actor| actor.inventory().names())
        .map(str::to_string)
        .collect()
}

/// Every item still lying in a room, as `<item> in <room>`.
pub fn all_room_items(world: &World) -> Vec<String> {
    world
        .map()
        .rooms()
        .iter()
        .flat_map(|room| {
            room.items()
                .iter()
                .map(move |item| format!("{} in {}", item.name(), room.name()))
        })
        .collect()
}
