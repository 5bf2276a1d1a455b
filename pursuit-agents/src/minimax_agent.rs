use pursuit_game_types::types::{
    AgentId, ChaserGettableGame, Direction, FoodGettableGame, OutcomeDeterminableGame,
    PlayerPositionGettableGame, ScoreGettableGame, SimulableGame,
};
use pursuit_minimax::Minimax;
use tracing::info_span;

use crate::config::AgentConfig;
use crate::error::{ConfigError, DecisionError};
use crate::evaluation::{evaluation_by_name, EvaluationFunction};

/// The worst-case planner: assumes every chaser picks the reply the player likes least.
pub struct MinimaxAgent<GameType> {
    engine: Minimax<EvaluationFunction<GameType>>,
}

impl<GameType> MinimaxAgent<GameType>
where
    GameType: SimulableGame
        + OutcomeDeterminableGame
        + ScoreGettableGame
        + PlayerPositionGettableGame
        + FoodGettableGame
        + ChaserGettableGame,
{
    /// Resolve the configured evaluation function and wrap it in a minimax engine.
    pub fn from_config(config: &AgentConfig) -> Result<Self, ConfigError> {
        let evaluation = evaluation_by_name(&config.evaluation_function)?;

        Ok(Self {
            engine: Minimax::new(evaluation, config.depth),
        })
    }

    /// Pick a move, or report that the root state offers the player nothing legal.
    pub fn choose_action(&self, state: &GameType) -> Result<Direction, DecisionError> {
        info_span!(
            "minimax_choose_action",
            chosen_direction = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        )
        .in_scope(|| {
            if state.legal_actions(AgentId::PLAYER).is_empty() {
                return Err(DecisionError::NoLegalActions);
            }

            let decision = self.engine.decide(state);

            let current_span = tracing::Span::current();
            let chosen_direction = format!("{}", decision.action);
            let chosen_score = format!("{:?}", decision.value);
            current_span.record("chosen_direction", &chosen_direction);
            current_span.record("chosen_score", &chosen_score);

            Ok(decision.action)
        })
    }
}
