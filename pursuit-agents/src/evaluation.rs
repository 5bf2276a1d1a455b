//! Named evaluation functions for pursuit game states.
//!
//! Agents are configured with a function NAME so the choice can travel over the wire; the
//! lookup happens once, at agent construction, and unknown names fail there rather than in
//! the middle of a game.

use decorum::N64;
use pursuit_game_types::types::{
    ChaserGettableGame, FoodGettableGame, PlayerPositionGettableGame, ScoreGettableGame,
};

use crate::error::ConfigError;

/// The signature every named evaluation function shares.
pub type EvaluationFunction<GameType> = fn(&GameType) -> N64;

const FOOD_WEIGHT: f64 = 0.8;
const CHASER_WEIGHT: f64 = 0.5;
const SAFE_TIME_WEIGHT: f64 = 0.15;

/// Look up an evaluation function by its wire name.
pub fn evaluation_by_name<GameType>(
    name: &str,
) -> Result<EvaluationFunction<GameType>, ConfigError>
where
    GameType:
        ScoreGettableGame + PlayerPositionGettableGame + FoodGettableGame + ChaserGettableGame,
{
    match name {
        "score" => Ok(score_evaluation),
        "composite" => Ok(composite_evaluation),
        other => Err(ConfigError::UnknownEvaluationFunction {
            name: other.to_owned(),
        }),
    }
}

/// The state's intrinsic score and nothing else.
pub fn score_evaluation<GameType: ScoreGettableGame>(state: &GameType) -> N64 {
    N64::from(state.score())
}

/// The intrinsic score sharpened by three positional terms: get close to the nearest pellet,
/// keep the chaser pack at arm's length, and account for how long the chasers stay harmless.
///
/// Every divisor is floored at one square, so standing right next to something never blows
/// the term up. A cleared plate counts as distance one.
pub fn composite_evaluation<GameType>(state: &GameType) -> N64
where
    GameType:
        ScoreGettableGame + PlayerPositionGettableGame + FoodGettableGame + ChaserGettableGame,
{
    let player = state.player_position();

    let closest_pellet = state
        .food_positions()
        .iter()
        .map(|food| player.manhattan_distance(food))
        .min()
        .unwrap_or(1)
        .max(1);
    let food_term = FOOD_WEIGHT / closest_pellet as f64;

    let chasers = state.chasers();
    let chaser_distances: i32 = chasers
        .iter()
        .map(|chaser| player.manhattan_distance(&chaser.position))
        .sum();
    let chaser_term = CHASER_WEIGHT / (1 + chaser_distances) as f64;

    let harmless_time: u32 = chasers.iter().map(|chaser| chaser.harmless_turns).sum();
    let safe_time_term = SAFE_TIME_WEIGHT / (1 + harmless_time) as f64;

    N64::from(state.score() + food_term - chaser_term + safe_time_term)
}
