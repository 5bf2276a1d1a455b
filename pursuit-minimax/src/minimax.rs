use derivative::Derivative;
use pursuit_game_types::types::{Direction, OutcomeDeterminableGame, SimulableGame};
use tracing::debug;

use crate::decision::Decision;
use crate::evaluator::Evaluator;
use crate::ply::Ply;

/// Full-width minimax: the player maximizes and every other agent is assumed to pick the
/// reply the player likes least.
///
/// The lookahead runs a fixed number of rounds, a round being one move from every agent in
/// turn order. States that are already won or lost, and states that offer the agent to move
/// nothing legal, end the lookahead early and get scored where they stand.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct Minimax<EvaluatorType> {
    #[derivative(Debug = "ignore")]
    evaluator: EvaluatorType,
    depth: usize,
}

impl<EvaluatorType> Minimax<EvaluatorType> {
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
        let decision = self.minimax(state, Ply::root());
        debug!(
            chosen_action = %decision.action,
            chosen_value = ?decision.value,
            "minimax decided"
        );

        decision
    }

    fn minimax<GameType>(&self, state: &GameType, ply: Ply) -> Decision
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
            let value = self.minimax(&successor, next_ply).value;

            let improves = match &best {
                None => true,
                Some(current) if ply.agent.is_player() => value > current.value,
                Some(current) => value < current.value,
            };
            if improves {
                best = Some(Decision { action, value });
            }
        }

        // No legal actions is as final as a won or lost board. Score the state where it
        // stands; at the root this surfaces as a decision to stay put.
        best.unwrap_or_else(|| Decision {
            action: Direction::Stay,
            value: self.evaluator.evaluate(state),
        })
    }
}
