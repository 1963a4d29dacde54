/// Where the turn sequencer currently stands.
///
/// ```text
/// AwaitingAction ──apply──▶ Resolved ──advance──▶ AdvancingWorld ──▶ AwaitingAction
///                               │                                    ├─▶ Draw
///                               └──(target killed)──▶ GameOver
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// The active actor has not acted yet.
    #[default]
    AwaitingAction,
    /// An action was applied; the world has not been advanced for it yet.
    Resolved { consumes_turn: bool },
    /// Target and pet are moving. Never observable between engine calls.
    AdvancingWorld,
    GameOver { winner: String },
    /// The turn limit was reached while the target was still alive.
    Draw,
}

impl TurnPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver { .. } | Self::Draw)
    }
}

/// Turn bookkeeping: whose move it is and how many turns have been spent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    /// Index into the actor list of the actor whose move it is.
    pub active: usize,
    /// Number of turn-consuming actions resolved so far. Never decreases.
    pub turn: u32,
    pub phase: TurnPhase,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Passes the move to the next actor and counts the turn.
    pub(crate) fn rotate(&mut self, actor_count: usize) {
        self.turn = self.turn.saturating_add(1);
        if actor_count > 0 {
            self.active = (self.active + 1) % actor_count;
        }
    }
}
