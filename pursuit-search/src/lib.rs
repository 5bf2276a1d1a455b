//! Frontier-based graph search over an abstract problem interface.
//!
//! You describe a problem with the [SearchProblem] trait and the algorithms here walk it:
//! depth-first, breadth-first, uniform-cost, and A* search, all sharing one frontier-driven
//! skeleton. The algorithms never look inside your states. They clone them, hash them, and
//! hand them back to the problem.
//!
//! ```rust
//! use decorum::N64;
//! use pursuit_search::{breadth_first_search, SearchProblem, Successor};
//!
//! // Start from zero, reach four. Every step either adds one or doubles.
//! struct DoubleOrIncrement;
//!
//! impl SearchProblem for DoubleOrIncrement {
//!     type State = u32;
//!     type Action = char;
//!
//!     fn start_state(&self) -> u32 {
//!         0
//!     }
//!
//!     fn is_goal_state(&self, state: &u32) -> bool {
//!         *state == 4
//!     }
//!
//!     fn successors(&self, state: &u32) -> Vec<Successor<u32, char>> {
//!         vec![
//!             Successor { state: state + 1, action: '+', cost: N64::from(1.0) },
//!             Successor { state: state * 2, action: '*', cost: N64::from(1.0) },
//!         ]
//!     }
//!
//!     fn cost_of_actions(&self, actions: &[char]) -> N64 {
//!         N64::from(actions.len() as f64)
//!     }
//! }
//!
//! let plan = breadth_first_search(&DoubleOrIncrement).expect("four is reachable");
//! assert_eq!(plan, vec!['+', '+', '*']);
//! ```

pub mod graph_search;
pub mod heuristic;
pub mod problem;

pub use graph_search::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search,
};
pub use heuristic::{null_heuristic, Heuristic};
pub use problem::{SearchProblem, Successor};
