use crate::action::{ActionError, ActionTransition, AttackError};
use crate::config::GameConfig;
use crate::state::{ActorId, World};

/// Weapon choice for an attack.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weapon {
    /// Poke the target in the eye.
    #[default]
    Default,
    /// An inventory item, matched case-insensitively.
    Named(String),
}

impl Weapon {
    /// Blank input and `"default"` (any case) select the default attack.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(GameConfig::DEFAULT_WEAPON) {
            Self::Default
        } else {
            Self::Named(name.to_string())
        }
    }
}

impl From<&str> for Weapon {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for Weapon {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

/// How an attack that did not error played out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attacker is not in the target's room. Nothing changed.
    NotInTargetRoom,
    /// Another actor saw the attempt. Nothing changed.
    Seen { by: ActorId, observer: String },
    /// Damage was applied.
    Hit {
        /// Spent inventory item, or `None` for the default poke.
        weapon: Option<String>,
        damage: u32,
        remaining: u32,
        killed: bool,
    },
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// Attempt to damage the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub actor: ActorId,
    pub weapon: Weapon,
}

impl AttackAction {
    pub fn new(actor: ActorId, weapon: Weapon) -> Self {
        Self { actor, weapon }
    }
}

impl ActionTransition for AttackAction {
    type Output = AttackOutcome;

    fn actor(&self) -> ActorId {
        self.actor
    }

    fn apply(&self, world: &mut World) -> Result<Self::Output, ActionError> {
        let attacker = world
            .actor(self.actor)
            .ok_or(ActionError::UnknownActor(self.actor))?;

        if attacker.room() != world.target().room() {
            return Ok(AttackOutcome::NotInTargetRoom);
        }

        if let Some(by) = world.observer_of(self.actor) {
            let observer = world
                .actor(by)
                .map(|actor| actor.name().to_string())
                .unwrap_or_default();
            return Ok(AttackOutcome::Seen { by, observer });
        }

        let attacker_name = attacker.name().to_string();
        let poke = attacker.inventory().is_empty() || self.weapon == Weapon::Default;

        let (weapon, damage) = match &self.weapon {
            Weapon::Named(name) if !poke => {
                let actor = world
                    .actor_mut(self.actor)
                    .ok_or(ActionError::UnknownActor(self.actor))?;
                let item = actor
                    .inventory
                    .take(name)
                    .ok_or_else(|| AttackError::WeaponNotFound {
                        weapon: name.clone(),
                    })?;
                (Some(item.name().to_string()), item.damage())
            }
            _ => (None, GameConfig::DEFAULT_ATTACK_DAMAGE),
        };

        let was_alive = !world.target().is_dead();
        let remaining = world.damage_target(&attacker_name, damage);

        Ok(AttackOutcome::Hit {
            weapon,
            damage,
            remaining,
            killed: was_alive && remaining == 0,
        })
    }
}
