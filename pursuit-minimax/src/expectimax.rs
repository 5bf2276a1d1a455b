use decorum::{Infinite, N64};
use derivative::Derivative;
use pursuit_game_types::types::{AgentId, Direction, OutcomeDeterminableGame, SimulableGame};
use tracing::debug;

use crate::decision::Decision;
use crate::evaluator::Evaluator;
use crate::ply::Ply;

/// Expectation-maximizing search for adversaries that blunder.
///
/// The player still maximizes, but every other agent is modeled as choosing uniformly at
/// random among its legal actions, so adversarial nodes are worth the plain average of their
/// replies instead of the worst one.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct Expectimax<EvaluatorType> {
    #[derivative(Debug = "ignore")]
    evaluator: EvaluatorType,
    depth: usize,
}

impl<EvaluatorType> Expectimax<EvaluatorType> {
    /// Build an engine that looks ahead `depth` full rounds and scores the frontier with the
    /// given evaluator.
    pub fn new(evaluator: EvaluatorType, depth: usize) -> Self {
        Self { evaluator, depth }
    }

    /// Pick the player's move from the given state.
    ///
    /// The lookahead backs up bare values; only this root loop remembers which action
    /// produced the best one. Ties resolve to whichever legal action comes first.
    pub fn decide<GameType>(&self, state: &GameType) -> Decision
    where
        GameType: SimulableGame + OutcomeDeterminableGame,
        EvaluatorType: Evaluator<GameType>,
    {
        if self.depth == 0 || state.is_over() {
            return Decision {
                action: Direction::Stay,
                value: self.evaluator.evaluate(state),
            };
        }

        let next_ply = Ply::root().next(state.agent_count());
        let mut best: Option<Decision> = None;

        for action in state.legal_actions(AgentId::PLAYER) {
            let successor = state.generate_successor(AgentId::PLAYER, action);
            let value = self.expectimax_value(&successor, next_ply);

            let improves = match &best {
                None => true,
                Some(current) => value > current.value,
            };
            if improves {
                best = Some(Decision { action, value });
            }
        }

        let decision = best.unwrap_or_else(|| Decision {
            action: Direction::Stay,
            value: self.evaluator.evaluate(state),
        });
        debug!(
            chosen_action = %decision.action,
            chosen_value = ?decision.value,
            "expectimax decided"
        );

        decision
    }

    fn expectimax_value<GameType>(&self, state: &GameType, ply: Ply) -> N64
    where
        GameType: SimulableGame + OutcomeDeterminableGame,
        EvaluatorType: Evaluator<GameType>,
    {
        if ply.rounds == self.depth || state.is_over() {
            return self.evaluator.evaluate(state);
        }

        let actions = state.legal_actions(ply.agent);
        if actions.is_empty() {
            return self.evaluator.evaluate(state);
        }

        let next_ply = ply.next(state.agent_count());
        let child_values = actions.into_iter().map(|action| {
            let successor = state.generate_successor(ply.agent, action);
            self.expectimax_value(&successor, next_ply)
        });

        if ply.agent.is_player() {
            child_values.fold(N64::NEG_INFINITY, Ord::max)
        } else {
            let (total, count) = child_values
                .fold((N64::from(0.0), 0usize), |(total, count), value| {
                    (total + value, count + 1)
                });

            total / N64::from(count as f64)
        }
    }
}
