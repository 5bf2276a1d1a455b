use itertools::Itertools;
use pursuit_game_types::types::{
    AgentId, ChaserGettableGame, Direction, FoodGettableGame, PlayerPositionGettableGame,
    ScoreGettableGame, SimulableGame,
};
use rand::seq::SliceRandom;
use tracing::info_span;

use crate::error::DecisionError;
use crate::evaluation::composite_evaluation;

/// One-move lookahead: try every legal action, score the board it leads to with the
/// composite evaluation, take the best. Exact ties are broken uniformly at random, so the
/// agent does not telegraph a fixed preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexAgent;

impl ReflexAgent {
    pub fn new() -> Self {
        ReflexAgent
    }

    pub fn choose_action<GameType>(&self, state: &GameType) -> Result<Direction, DecisionError>
    where
        GameType: SimulableGame
            + ScoreGettableGame
            + PlayerPositionGettableGame
            + FoodGettableGame
            + ChaserGettableGame,
    {
        info_span!(
            "reflex_choose_action",
            chosen_direction = tracing::field::Empty,
        )
        .in_scope(|| {
            let scored = state
                .legal_actions(AgentId::PLAYER)
                .into_iter()
                .map(|action| {
                    let successor = state.generate_successor(AgentId::PLAYER, action);
                    (action, composite_evaluation(&successor))
                })
                .collect_vec();

            let best = match scored.iter().map(|&(_, value)| value).max() {
                Some(best) => best,
                None => return Err(DecisionError::NoLegalActions),
            };

            let candidates = scored
                .iter()
                .filter(|&&(_, value)| value == best)
                .map(|&(action, _)| action)
                .collect_vec();

            let chosen = candidates
                .choose(&mut rand::thread_rng())
                .copied()
                .ok_or(DecisionError::NoLegalActions)?;

            let current_span = tracing::Span::current();
            let chosen_direction = format!("{}", chosen);
            current_span.record("chosen_direction", &chosen_direction);

            Ok(chosen)
        })
    }
}
