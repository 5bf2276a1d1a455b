//! Error types for the agent layer

use thiserror::Error;

/// Errors raised while building an agent from an [`AgentConfig`](crate::AgentConfig).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown evaluation function '{name}' (expected 'score' or 'composite')")]
    UnknownEvaluationFunction { name: String },
}

/// Errors raised when an agent is asked to act.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecisionError {
    #[error("the player has no legal actions to choose from")]
    NoLegalActions,
}
