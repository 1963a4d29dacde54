use crate::action::Action;
use crate::ai::nodes::{
    AttackWithBestWeapon, InTargetRoom, IsObserved, LookAround, MoveTowardTarget,
    PickUpRandomItem,
};
use crate::ai::tree::{Behavior, Inverter, Selector, Sequence};
use crate::ai::PolicyContext;
use crate::rng::RngOracle;
use crate::state::{ActorId, Controller, World};

/// Per-actor memory of the AI policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyState {
    /// Decisions made so far; the nonce for this actor's random rolls.
    pub decisions: u64,
}

/// The deterministic AI policy.
///
/// In strict priority order:
/// 1. attack with the strongest item when in the target's room and unseen
/// 2. pick up an item in the current room
/// 3. move to the neighbor closest to the target's room
/// 4. look around
#[derive(Clone, Copy, Debug, Default)]
pub struct AiPolicy;

impl AiPolicy {
    pub fn new() -> Self {
        Self
    }

    fn tree<'a>() -> Selector<'a, PolicyContext<'a>> {
        let unseen: Inverter<'a, PolicyContext<'a>> = Inverter::new(Box::new(IsObserved));
        let attack: Sequence<'a, PolicyContext<'a>> = Sequence::new(vec![
            Box::new(InTargetRoom),
            Box::new(unseen),
            Box::new(AttackWithBestWeapon),
        ]);
        Selector::new(vec![
            Box::new(attack),
            Box::new(PickUpRandomItem),
            Box::new(MoveTowardTarget),
            Box::new(LookAround),
        ])
    }

    /// Chooses an action for `actor`. Never fails: looking around is always
    /// possible.
    pub fn decide(&self, world: &World, actor: ActorId, rng: &dyn RngOracle) -> Action {
        let nonce = match world.actor(actor).map(|a| a.controller()) {
            Some(Controller::Ai(state)) => state.decisions,
            _ => 0,
        };
        let mut ctx = PolicyContext::new(actor, world, rng, nonce);
        Self::tree().tick(&mut ctx);
        let action = ctx.take_action().unwrap_or(Action::Look);
        tracing::debug!(actor = actor.index(), kind = %action.kind(), "ai decided");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Weapon;
    use crate::config::GameConfig;
    use crate::map::{MapDimensions, Rect, RoomId, RoomKey};
    use crate::rng::{FixedRng, PcgRng};
    use crate::state::fixtures::parlor_world;
    use crate::state::{ItemSpec, RoomSpec, TargetSpec, WorldSpec};

    /// A Hall with rooms on its four sides and the target beyond East.
    ///
    /// Hall(0) touches North(1), South(2), West(3) and East(4); FarEast(5)
    /// touches only East.
    fn hub_spec() -> WorldSpec {
        let room = |name: &str, rect| RoomSpec {
            name: name.into(),
            rect,
        };
        WorldSpec {
            name: "Hub House".into(),
            dimensions: MapDimensions::new(15, 20),
            target: TargetSpec {
                name: "Doctor Lucky".into(),
                health: 50,
                start: 5,
            },
            pet_name: "Fortune the Cat".into(),
            rooms: vec![
                room("Hall", Rect::new(5, 5, 9, 9)),
                room("North", Rect::new(0, 5, 4, 9)),
                room("South", Rect::new(10, 5, 14, 9)),
                room("West", Rect::new(5, 0, 9, 4)),
                room("East", Rect::new(5, 10, 9, 14)),
                room("FarEast", Rect::new(5, 15, 9, 19)),
            ],
            items: Vec::new(),
        }
    }

    #[test]
    fn unseen_ai_in_target_room_attacks_with_strongest_item() {
        let mut world = parlor_world();
        let bot = world.add_ai("Bot", 0).unwrap();
        Action::pick_up("Knife").execute(bot, &mut world).unwrap();

        let action = AiPolicy.decide(&world, bot, &PcgRng);
        assert_eq!(
            action,
            Action::Attack {
                weapon: Weapon::Named("Knife".into())
            }
        );
    }

    #[test]
    fn unarmed_ai_pokes() {
        let mut world = parlor_world();
        let bot = world.add_ai("Bot", 0).unwrap();
        Action::pick_up("Knife").execute(bot, &mut world).unwrap();
        Action::attack("Knife").execute(bot, &mut world).unwrap();

        let action = AiPolicy.decide(&world, bot, &PcgRng);
        assert_eq!(
            action,
            Action::Attack {
                weapon: Weapon::Default
            }
        );
    }

    #[test]
    fn observed_ai_picks_up_instead() {
        let mut world = parlor_world();
        let bot = world.add_ai("Bot", 0).unwrap();
        world.add_human("Alice", 1).unwrap();
        let action = AiPolicy.decide(&world, bot, &FixedRng(0));
        assert_eq!(action, Action::pick_up("Knife"));
    }

    #[test]
    fn ai_moves_toward_target() {
        let mut world = parlor_world();
        let bot = world.add_ai("Bot", 1).unwrap();
        let action = AiPolicy.decide(&world, bot, &PcgRng);
        assert_eq!(action, Action::Move { to: RoomKey::Index(0) });
    }

    #[test]
    fn ai_picks_the_neighbor_closest_to_the_target() {
        let mut world = World::from_spec(hub_spec(), GameConfig::default()).unwrap();
        let bot = world.add_ai("Bot", 0).unwrap();
        assert_eq!(world.map().neighbors(RoomId(0)).len(), 4);

        let action = AiPolicy.decide(&world, bot, &PcgRng);
        assert_eq!(action, Action::Move { to: RoomKey::Index(4) });
    }

    #[test]
    fn equally_close_neighbors_resolve_to_the_lowest_index() {
        let mut spec = hub_spec();
        // Without West and East, North and South are the same distance away.
        spec.rooms.remove(4);
        spec.rooms.remove(3);
        spec.target.start = 3;
        let mut world = World::from_spec(spec, GameConfig::default()).unwrap();
        let bot = world.add_ai("Bot", 0).unwrap();
        assert_eq!(world.map().neighbors(RoomId(0)), &[RoomId(1), RoomId(2)]);

        let action = AiPolicy.decide(&world, bot, &PcgRng);
        assert_eq!(action, Action::Move { to: RoomKey::Index(1) });
    }

    #[test]
    fn full_inventory_moves_on_instead_of_picking_up() {
        let mut spec = hub_spec();
        spec.items = (0..7)
            .map(|n| ItemSpec {
                room: 0,
                damage: 1,
                name: format!("Trinket {n}"),
            })
            .collect();
        let mut world = World::from_spec(spec, GameConfig::default()).unwrap();
        let bot = world.add_ai("Bot", 0).unwrap();
        for n in 0..GameConfig::MAX_INVENTORY_SLOTS {
            Action::pick_up(format!("Trinket {n}"))
                .execute(bot, &mut world)
                .unwrap();
        }
        assert!(!world.map().room(RoomId(0)).items().is_empty());

        let action = AiPolicy.decide(&world, bot, &FixedRng(0));
        assert_eq!(action, Action::Move { to: RoomKey::Index(4) });
    }

    #[test]
    fn isolated_ai_looks() {
        let mut world = parlor_world();
        let bot = world.add_ai("Bot", 2).unwrap();
        assert_eq!(AiPolicy.decide(&world, bot, &PcgRng), Action::Look);
    }
}
