use decorum::{Infinite, N64};
use derivative::Derivative;
use pursuit_game_types::types::{Direction, OutcomeDeterminableGame, SimulableGame};
use tracing::debug;

use crate::decision::Decision;
use crate::evaluator::Evaluator;
use crate::ply::Ply;

/// Minimax with alpha-beta pruning.
///
/// Skips subtrees that can no longer influence what the root picks, and otherwise agrees
/// with [`Minimax`](crate::Minimax) exactly: same value, same action, on every state.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct AlphaBeta<EvaluatorType> {
    #[derivative(Debug = "ignore")]
    evaluator: EvaluatorType,
    depth: usize,
}

impl<EvaluatorType> AlphaBeta<EvaluatorType> {
    /// Build an engine that looks ahead `depth` full rounds and scores the frontier with the
    /// given evaluator.
    pub fn new(evaluator: EvaluatorType, depth: usize) -> Self {
        Self { evaluator, depth }
    }

    /// Pick the player's move from the given state.
    ///
    /// Ties between root actions resolve to whichever legal action comes first, so repeated
    /// calls on the same state always agree.
    pub fn decide<GameType>(&self, state: &GameType) -> Decision
    where
        GameType: SimulableGame + OutcomeDeterminableGame,
        EvaluatorType: Evaluator<GameType>,
    {
        let decision = self.alphabeta(state, Ply::root(), N64::NEG_INFINITY, N64::INFINITY);
        debug!(
            chosen_action = %decision.action,
            chosen_value = ?decision.value,
            "alpha-beta decided"
        );

        decision
    }

    fn alphabeta<GameType>(
        &self,
        state: &GameType,
        ply: Ply,
        mut alpha: N64,
        mut beta: N64,
    ) -> Decision
    where
        GameType: SimulableGame + OutcomeDeterminableGame,
        EvaluatorType: Evaluator<GameType>,
    {
        if ply.rounds == self.depth || state.is_over() {
            return Decision {
                action: Direction::Stay,
                value: self.evaluator.evaluate(state),
            };
        }

        let next_ply = ply.next(state.agent_count());
        let mut best: Option<Decision> = None;

        for action in state.legal_actions(ply.agent) {
            let successor = state.generate_successor(ply.agent, action);
            let value = self.alphabeta(&successor, next_ply, alpha, beta).value;

            let improves = match &best {
                None => true,
                Some(current) if ply.agent.is_player() => value > current.value,
                Some(current) => value < current.value,
            };
            if improves {
                best = Some(Decision { action, value });
            }

            if ply.agent.is_player() {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            // Strictly beyond, never on equality: pruning a tie could change which action
            // the root reports.
            if alpha > beta {
                break;
            }
        }

        best.unwrap_or_else(|| Decision {
            action: Direction::Stay,
            value: self.evaluator.evaluate(state),
        })
    }
}
