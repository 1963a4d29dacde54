//! Input adapters for human-controlled actors.
//!
//! AI actors are driven by the built-in policy; everyone else gets their
//! action from an [`ActionProvider`]: a UI, a script, or a test fixture.

use std::collections::VecDeque;

use crate::action::Action;
use crate::state::{ActorId, World};

/// Source of actions for human-controlled actors.
pub trait ActionProvider {
    /// Next action for `actor`, or `None` when no more input is available.
    fn provide_action(&mut self, actor: ActorId, world: &World) -> Option<Action>;
}

/// Always looks around. Keeps a game moving when nobody is at the keyboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookAroundProvider;

impl ActionProvider for LookAroundProvider {
    fn provide_action(&mut self, _actor: ActorId, _world: &World) -> Option<Action> {
        Some(Action::Look)
    }
}

/// Replays a fixed list of actions in order, regardless of who asks.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    queue: VecDeque<Action>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_action(&mut self, _actor: ActorId, _world: &World) -> Option<Action> {
        self.queue.pop_front()
    }
}
