#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]

//! Fixed-depth adversarial tree search for games where one player squares off against a pack
//! of adversaries that each take a turn per round.
//!
//! Three engines share the same turn model and differ only in what they assume about the
//! adversaries: [`Minimax`] and [`AlphaBeta`] expect perfect hostility (alpha-beta just gets
//! to the same answer faster), while [`Expectimax`] models them as picking uniformly at
//! random. Each engine borrows an [`Evaluator`] to score the states at the bottom of the
//! lookahead, and plain closures work as evaluators out of the box.
//!
//! ```rust
//! use decorum::N64;
//! use pursuit_game_types::types::{
//!     AgentCountableGame, AgentId, Direction, OutcomeDeterminableGame, SimulableGame,
//! };
//! use pursuit_minimax::Minimax;
//!
//! // Two agents fight over a counter. The player pushes it up by two or one, the chaser
//! // drags it down by one, and the player wants it as high as possible.
//! #[derive(Debug, Clone)]
//! struct TugOfWar {
//!     counter: i32,
//! }
//!
//! impl AgentCountableGame for TugOfWar {
//!     fn agent_count(&self) -> usize {
//!         2
//!     }
//! }
//!
//! impl SimulableGame for TugOfWar {
//!     fn legal_actions(&self, agent: AgentId) -> Vec<Direction> {
//!         if agent.is_player() {
//!             vec![Direction::North, Direction::South]
//!         } else {
//!             vec![Direction::South]
//!         }
//!     }
//!
//!     fn generate_successor(&self, agent: AgentId, action: Direction) -> Self {
//!         let delta = match (agent.is_player(), action) {
//!             (true, Direction::North) => 2,
//!             (true, _) => 1,
//!             (false, _) => -1,
//!         };
//!         TugOfWar {
//!             counter: self.counter + delta,
//!         }
//!     }
//! }
//!
//! impl OutcomeDeterminableGame for TugOfWar {
//!     fn is_win(&self) -> bool {
//!         self.counter >= 10
//!     }
//!
//!     fn is_lose(&self) -> bool {
//!         self.counter <= -10
//!     }
//! }
//!
//! fn counter_height(game: &TugOfWar) -> N64 {
//!     N64::from(game.counter as f64)
//! }
//!
//! let engine = Minimax::new(&counter_height, 2);
//! let decision = engine.decide(&TugOfWar { counter: 0 });
//!
//! assert_eq!(decision.action, Direction::North);
//! assert_eq!(decision.value, N64::from(2.0));
//! ```

mod alphabeta;
mod decision;
mod evaluator;
mod expectimax;
mod minimax;
mod ply;

pub use alphabeta::AlphaBeta;
pub use decision::Decision;
pub use evaluator::Evaluator;
pub use expectimax::Expectimax;
pub use minimax::Minimax;

#[cfg(test)]
pub(crate) mod fixtures;
