use crate::action::{Action, ActionOutcome};
use crate::engine::{ActionProvider, TurnEngine, TurnError};
use crate::error::GameError;
use crate::state::{ActorId, Controller, TurnPhase};

/// Summary of where a game stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { turn: u32 },
    Won { winner: String },
    Draw { turns: u32 },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// Everything that happened during one [`TurnEngine::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Turn counter before the action was applied.
    pub turn: u32,
    pub actor: ActorId,
    pub actor_name: String,
    pub action: Action,
    pub outcome: ActionOutcome,
    /// Whether the target and the roaming entity moved afterwards.
    pub world_advanced: bool,
    pub status: GameStatus,
}

impl<'a> TurnEngine<'a> {
    /// Consecutive turn-free actions tolerated by [`Self::run`].
    pub const STALL_LIMIT: u32 = 100;

    /// The actor whose move it is.
    pub fn current_actor(&self) -> Result<ActorId, TurnError> {
        let count = self.world.actors().len();
        if count == 0 {
            return Err(TurnError::NoActors);
        }
        Ok(ActorId(self.world.turn().active % count))
    }

    pub fn status(&self) -> GameStatus {
        let turn = self.world.turn();
        match &turn.phase {
            TurnPhase::GameOver { winner } => GameStatus::Won {
                winner: winner.clone(),
            },
            TurnPhase::Draw => GameStatus::Draw { turns: turn.turn },
            _ => GameStatus::InProgress { turn: turn.turn },
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.world.turn().phase.is_terminal() || self.world.target().is_dead()
    }

    pub fn winner(&self) -> Option<&str> {
        self.world.winner()
    }

    /// Rejects new actions once the game is over or while one is pending.
    ///
    /// Reaching the turn limit is noticed here and ends the game in a draw.
    fn ensure_accepting(&mut self) -> Result<(), TurnError> {
        let phase = &self.world.turn.phase;
        if phase.is_terminal() || self.world.target().is_dead() {
            return Err(TurnError::GameFinished);
        }
        if *phase != TurnPhase::AwaitingAction {
            return Err(TurnError::ActionPending);
        }
        if self.world.turn.turn >= self.world.config().max_turns {
            self.declare_draw();
            return Err(TurnError::GameFinished);
        }
        Ok(())
    }

    fn declare_draw(&mut self) {
        self.world.turn.phase = TurnPhase::Draw;
        tracing::info!(
            turns = self.world.turn.turn,
            target = self.world.target().name(),
            health = self.world.target().health(),
            "turn limit reached, game is a draw"
        );
    }

    /// Applies `action` on behalf of the current actor.
    ///
    /// Rule violations (illegal move, missing item, ...) do not make this
    /// fail: they are recorded in the returned outcome and leave the world
    /// unchanged. A lethal attack ends the game immediately.
    pub fn apply_action(&mut self, action: Action) -> Result<ActionOutcome, TurnError> {
        self.ensure_accepting()?;
        let actor = self.current_actor()?;
        let kind = action.kind();
        let consumes_turn = kind.consumes_turn(self.world.config());

        let result = action.execute(actor, self.world);

        if let Some(Controller::Ai(state)) = self
            .world
            .actor_mut(actor)
            .map(|actor| &mut actor.controller)
        {
            state.decisions += 1;
        }

        match &result {
            Ok(result) => tracing::debug!(
                actor = actor.index(),
                %kind,
                consumes_turn,
                ?result,
                "action applied"
            ),
            Err(error) if error.severity().is_internal() => tracing::error!(
                actor = actor.index(),
                %kind,
                code = error.error_code(),
                %error,
                "action failed on inconsistent state"
            ),
            Err(error) => tracing::warn!(
                actor = actor.index(),
                %kind,
                code = error.error_code(),
                severity = error.severity().as_str(),
                %error,
                "action rejected"
            ),
        }

        let outcome = ActionOutcome {
            actor,
            kind,
            consumes_turn,
            result,
        };

        self.world.turn.phase = if outcome.killed_target() {
            let winner = self.world.winner().unwrap_or_default().to_string();
            tracing::info!(
                winner = %winner,
                turn = self.world.turn.turn,
                "target killed, game over"
            );
            TurnPhase::GameOver { winner }
        } else {
            TurnPhase::Resolved { consumes_turn }
        };

        Ok(outcome)
    }

    /// Finishes the turn for an applied action.
    ///
    /// For a turn-consuming action the target and the roaming entity each
    /// take one step, the turn counter increases and the next actor becomes
    /// active. Returns whether that happened.
    pub fn advance_world_if_turn_consuming(
        &mut self,
        outcome: &ActionOutcome,
    ) -> Result<bool, TurnError> {
        let consumes = match self.world.turn.phase {
            TurnPhase::Resolved { consumes_turn } => consumes_turn,
            TurnPhase::GameOver { .. } | TurnPhase::Draw => return Ok(false),
            TurnPhase::AwaitingAction | TurnPhase::AdvancingWorld => {
                return Err(TurnError::NoPendingAction);
            }
        };

        if !consumes {
            self.world.turn.phase = TurnPhase::AwaitingAction;
            return Ok(false);
        }

        self.world.turn.phase = TurnPhase::AdvancingWorld;
        let target_room = self.world.advance_target();
        let pet_room = self.world.advance_pet();
        let actor_count = self.world.actors().len();
        self.world.turn.rotate(actor_count);

        tracing::debug!(
            after = %outcome.kind,
            turn = self.world.turn.turn,
            target_room = self.world.map().name(target_room),
            pet_room = self.world.map().name(pet_room),
            "world advanced"
        );

        if self.world.turn.turn >= self.world.config().max_turns {
            self.declare_draw();
        } else {
            self.world.turn.phase = TurnPhase::AwaitingAction;
        }
        Ok(true)
    }

    fn choose_action(
        &self,
        actor: ActorId,
        provider: &mut dyn ActionProvider,
    ) -> Result<Action, TurnError> {
        let Some(state) = self.world.actor(actor) else {
            return Err(TurnError::NoActors);
        };
        match state.controller() {
            Controller::Ai(_) => Ok(self.policy.decide(self.world, actor, self.rng)),
            Controller::Human => provider
                .provide_action(actor, self.world)
                .ok_or_else(|| TurnError::NoInput {
                    actor: state.name().to_string(),
                }),
        }
    }

    /// Plays one action for the current actor and advances the world if the
    /// action consumes the turn.
    pub fn step(&mut self, provider: &mut dyn ActionProvider) -> Result<TurnReport, TurnError> {
        self.ensure_accepting()?;
        let actor = self.current_actor()?;
        let turn = self.world.turn().turn;
        let actor_name = self
            .world
            .actor(actor)
            .map(|a| a.name().to_string())
            .unwrap_or_default();

        let action = self.choose_action(actor, provider)?;
        let outcome = self.apply_action(action.clone())?;
        let world_advanced = self.advance_world_if_turn_consuming(&outcome)?;

        Ok(TurnReport {
            turn,
            actor,
            actor_name,
            action,
            outcome,
            world_advanced,
            status: self.status(),
        })
    }

    /// Plays until the target dies or the turn limit is reached.
    pub fn run(&mut self, provider: &mut dyn ActionProvider) -> Result<GameStatus, TurnError> {
        self.run_with(provider, |_| {})
    }

    /// Like [`Self::run`], handing every turn report to `on_turn`.
    pub fn run_with(
        &mut self,
        provider: &mut dyn ActionProvider,
        mut on_turn: impl FnMut(&TurnReport),
    ) -> Result<GameStatus, TurnError> {
        let mut free_actions = 0u32;
        while !self.is_game_over() {
            let report = match self.step(provider) {
                Ok(report) => report,
                Err(TurnError::GameFinished) => break,
                Err(error) => return Err(error),
            };
            on_turn(&report);

            if report.world_advanced || report.status.is_over() {
                free_actions = 0;
            } else {
                free_actions += 1;
                if free_actions >= Self::STALL_LIMIT {
                    return Err(TurnError::Stalled {
                        actions: free_actions,
                    });
                }
            }
        }
        Ok(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionError, ActionResult, AttackOutcome};
    use crate::config::GameConfig;
    use crate::engine::{LookAroundProvider, ScriptedProvider};
    use crate::map::RoomId;
    use crate::rng::PcgRng;
    use crate::state::fixtures::{parlor_spec, parlor_world};
    use crate::state::World;

    #[test]
    fn no_actors_is_an_error() {
        let mut world = parlor_world();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);
        assert_eq!(engine.current_actor(), Err(TurnError::NoActors));
        assert_eq!(engine.apply_action(Action::Look), Err(TurnError::NoActors));
    }

    #[test]
    fn consuming_action_advances_world_and_rotates() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        let bob = world.add_human("Bob", 1).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);

        let outcome = engine.apply_action(Action::move_to("Kitchen")).unwrap();
        assert!(outcome.is_success());
        assert!(engine.advance_world_if_turn_consuming(&outcome).unwrap());

        let world = engine.world();
        assert_eq!(world.turn().turn, 1);
        assert_eq!(world.target().room(), RoomId(1));
        assert_eq!(world.pet().room(), RoomId(1));
        assert_eq!(world.actor(alice).unwrap().room(), RoomId(1));
        assert_eq!(engine.current_actor(), Ok(bob));
    }

    #[test]
    fn free_action_keeps_the_same_actor() {
        let mut world = parlor_world();
        let alice = world.add_human("Alice", 0).unwrap();
        world.add_human("Bob", 1).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);

        let outcome = engine.apply_action(Action::Describe).unwrap();
        assert_eq!(
            outcome.result,
            Ok(ActionResult::Described {
                summary: "Alice @ Parlor    Items: []".into()
            })
        );
        assert!(!engine.advance_world_if_turn_consuming(&outcome).unwrap());
        assert_eq!(engine.current_actor(), Ok(alice));
        assert_eq!(engine.world().turn().turn, 0);
        assert_eq!(engine.world().target().room(), RoomId(0));
    }

    #[test]
    fn failed_move_still_spends_the_turn() {
        let mut world = parlor_world();
        world.add_human("Alice", 0).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);

        let outcome = engine.apply_action(Action::move_to("Cellar")).unwrap();
        assert!(matches!(outcome.result, Err(ActionError::Move(_))));
        assert!(outcome.consumes_turn);
        assert!(engine.advance_world_if_turn_consuming(&outcome).unwrap());
        assert_eq!(engine.world().turn().turn, 1);
    }

    #[test]
    fn phases_must_alternate() {
        let mut world = parlor_world();
        world.add_human("Alice", 0).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);

        let outcome = engine.apply_action(Action::Look).unwrap();
        assert_eq!(
            engine.apply_action(Action::Look),
            Err(TurnError::ActionPending)
        );
        engine.advance_world_if_turn_consuming(&outcome).unwrap();
        assert_eq!(
            engine.advance_world_if_turn_consuming(&outcome),
            Err(TurnError::NoPendingAction)
        );
    }

    #[test]
    fn lethal_attack_ends_game_without_advancing() {
        let mut spec = parlor_spec();
        spec.target.health = 1;
        let mut world = World::from_spec(spec, GameConfig::default()).unwrap();
        world.add_human("Alice", 0).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);

        let outcome = engine.apply_action(Action::attack("default")).unwrap();
        assert!(outcome.killed_target());
        assert!(!engine.advance_world_if_turn_consuming(&outcome).unwrap());
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), Some("Alice"));
        assert_eq!(
            engine.status(),
            GameStatus::Won {
                winner: "Alice".into()
            }
        );
        assert_eq!(engine.world().target().room(), RoomId(0));
        assert_eq!(
            engine.apply_action(Action::Look),
            Err(TurnError::GameFinished)
        );
    }

    #[test]
    fn turn_limit_ends_in_draw() {
        let mut world = World::from_spec(parlor_spec(), GameConfig::new().with_max_turns(3)).unwrap();
        world.add_human("Alice", 2).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);

        let status = engine.run(&mut LookAroundProvider).unwrap();
        assert_eq!(status, GameStatus::Draw { turns: 3 });
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn step_reports_seen_attack() {
        let mut world = parlor_world();
        world.add_human("Alice", 0).unwrap();
        world.add_human("Bob", 0).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);

        let mut script = ScriptedProvider::new([Action::attack("default")]);
        let report = engine.step(&mut script).unwrap();
        assert_eq!(report.actor_name, "Alice");
        assert!(matches!(
            report.outcome.result,
            Ok(ActionResult::Attack(AttackOutcome::Seen { .. }))
        ));
        assert!(report.world_advanced);
        assert_eq!(engine.world().target().health(), 50);
    }

    #[test]
    fn exhausted_script_is_reported() {
        let mut world = parlor_world();
        world.add_human("Alice", 0).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);
        let mut script = ScriptedProvider::new([]);
        assert_eq!(
            engine.step(&mut script),
            Err(TurnError::NoInput {
                actor: "Alice".into()
            })
        );
    }

    #[test]
    fn endless_free_actions_stall() {
        let mut world = parlor_world();
        world.add_human("Alice", 0).unwrap();
        let rng = PcgRng;
        let mut engine = TurnEngine::new(&mut world, &rng);
        let mut script = ScriptedProvider::new(std::iter::repeat_n(
            Action::Describe,
            TurnEngine::STALL_LIMIT as usize + 1,
        ));
        assert!(matches!(
            engine.run(&mut script),
            Err(TurnError::Stalled { .. })
        ));
    }

    #[test]
    fn ai_game_is_reproducible() {
        let play = || {
            let mut world = parlor_world();
            world.add_ai("Bot1", 1).unwrap();
            world.add_ai("Bot2", 2).unwrap();
            let rng = PcgRng;
            let mut engine = TurnEngine::new(&mut world, &rng);
            let mut reports = Vec::new();
            let status = engine
                .run_with(&mut LookAroundProvider, |report| {
                    reports.push(report.action.clone())
                })
                .unwrap();
            (status, reports)
        };
        assert_eq!(play(), play());
    }
}
