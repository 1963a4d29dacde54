//! Condition and action nodes for the AI policy.
//!
//! Conditions only read the world. Action nodes store an [`Action`] on the
//! context and succeed, or fail without storing anything.

use crate::action::{Action, Weapon};
use crate::ai::tree::{Behavior, Status};
use crate::ai::PolicyContext;

/// Succeeds when the actor shares a room with the target.
pub struct InTargetRoom;

impl Behavior<PolicyContext<'_>> for InTargetRoom {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        Status::from_bool(ctx.my_room() == Some(ctx.world.target().room()))
    }
}

/// Succeeds when another actor can see this one.
pub struct IsObserved;

impl Behavior<PolicyContext<'_>> for IsObserved {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        Status::from_bool(ctx.world.observer_of(ctx.actor).is_some())
    }
}

/// Attacks with the strongest carried item, or pokes when unarmed.
pub struct AttackWithBestWeapon;

impl Behavior<PolicyContext<'_>> for AttackWithBestWeapon {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        let Some(me) = ctx.me() else {
            return Status::Failure;
        };
        let weapon = me
            .inventory()
            .strongest()
            .map(|item| Weapon::Named(item.name().to_string()))
            .unwrap_or_default();
        ctx.set_action(Action::Attack { weapon });
        Status::Success
    }
}

/// Picks up one of the items in the current room, chosen by the seeded rng.
///
/// Fails when the actor's inventory is already full.
pub struct PickUpRandomItem;

impl PickUpRandomItem {
    const ROLL: u32 = 0;
}

impl Behavior<PolicyContext<'_>> for PickUpRandomItem {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        let Some(me) = ctx.me() else {
            return Status::Failure;
        };
        if me.inventory().is_full() {
            return Status::Failure;
        }
        let items = ctx.world.map().room(me.room()).items();
        let Some(index) = ctx.pick(Self::ROLL, items.len()) else {
            return Status::Failure;
        };
        let name = items[index].name().to_string();
        ctx.set_action(Action::pick_up(name));
        Status::Success
    }
}

/// Steps to the neighbor whose center is closest to the target's room.
///
/// Distance is the Manhattan distance between room centers; the first
/// neighbor reaching the minimum wins.
pub struct MoveTowardTarget;

impl Behavior<PolicyContext<'_>> for MoveTowardTarget {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        let Some(room) = ctx.my_room() else {
            return Status::Failure;
        };
        let map = ctx.world.map();
        let goal = ctx.world.target().room();

        let mut best = None;
        for &neighbor in map.neighbors(room) {
            let distance = map.center_distance(neighbor, goal);
            match best {
                Some((_, shortest)) if shortest <= distance => {}
                _ => best = Some((neighbor, distance)),
            }
        }

        match best {
            Some((neighbor, _)) => {
                ctx.set_action(Action::move_to(neighbor));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

pub struct LookAround;

impl Behavior<PolicyContext<'_>> for LookAround {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        ctx.set_action(Action::Look);
        Status::Success
    }
}
