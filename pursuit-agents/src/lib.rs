//! Agents for the pursuit game: a one-move reflex player and three engine-backed planners,
//! wired to a small JSON-friendly configuration surface.
//!
//! The crate re-exports the vocabulary, search, and game-tree crates, so downstream callers
//! can depend on this one alone.

pub mod config;
pub mod error;
pub mod evaluation;

pub mod alpha_beta_agent;
pub mod expectimax_agent;
pub mod minimax_agent;
pub mod reflex;

pub use config::AgentConfig;
pub use error::{ConfigError, DecisionError};
pub use evaluation::{
    composite_evaluation, evaluation_by_name, score_evaluation, EvaluationFunction,
};

pub use alpha_beta_agent::AlphaBetaAgent;
pub use expectimax_agent::ExpectimaxAgent;
pub use minimax_agent::MinimaxAgent;
pub use reflex::ReflexAgent;

pub use pursuit_game_types::types;
pub use pursuit_game_types::types::Direction;
pub use pursuit_minimax::{AlphaBeta, Decision, Evaluator, Expectimax, Minimax};
pub use pursuit_search::{
    a_star_search, breadth_first_search, depth_first_search, null_heuristic,
    uniform_cost_search, Heuristic, SearchProblem, Successor,
};
