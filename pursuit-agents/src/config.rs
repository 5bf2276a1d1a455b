use serde::{Deserialize, Serialize};

/// Tunable knobs shared by every agent in this crate.
///
/// Arrives over the wire as JSON; missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Which named evaluation function scores the lookahead frontier.
    #[serde(default = "default_evaluation_function")]
    pub evaluation_function: String,
    /// How many full rounds the engine-backed agents look ahead.
    #[serde(default = "default_depth")]
    pub depth: usize,
}

fn default_evaluation_function() -> String {
    "score".to_owned()
}

fn default_depth() -> usize {
    2
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            evaluation_function: default_evaluation_function(),
            depth: default_depth(),
        }
    }
}
