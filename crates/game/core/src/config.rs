/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of turn-consuming actions after which the game ends in a draw.
    pub max_turns: u32,

    /// Base seed for every random decision made by AI actors.
    ///
    /// Mixed with the deciding actor's index and its count of decisions so far,
    /// so a replay with the same seed reproduces the same game.
    pub game_seed: u64,

    /// Whether looking around the current room spends the actor's turn.
    pub look_consumes_turn: bool,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of items an actor can carry.
    pub const MAX_INVENTORY_SLOTS: usize = 5;

    // ===== rules =====
    /// Damage dealt by an attack without a weapon ("poke in the eye").
    pub const DEFAULT_ATTACK_DAMAGE: u32 = 1;
    /// Weapon name that always selects the default attack.
    pub const DEFAULT_WEAPON: &'static str = "default";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 20;
    pub const DEFAULT_GAME_SEED: u64 = 0;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            game_seed: Self::DEFAULT_GAME_SEED,
            look_consumes_turn: true,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self
    }

    pub fn with_look_consuming_turn(mut self, consumes: bool) -> Self {
        self.look_consumes_turn = consumes;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
