use std::fmt::Debug;
use std::hash::Hash;

use decorum::N64;

/// One outgoing edge from a state: the state it leads to, the action that gets you there, and
/// what taking that step costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// The state reached by taking [Successor::action]
    pub state: S,
    /// The transition label
    pub action: A,
    /// Incremental step cost, never negative
    pub cost: N64,
}

/// The problem interface every graph-search algorithm runs against.
///
/// There are deliberately no default method bodies here. A concrete problem that forgets an
/// operation fails to compile instead of failing at runtime halfway through a search.
///
/// The algorithms treat `State` as opaque. They only clone it, compare it for equality, hash
/// it, and hand it back to the problem.
pub trait SearchProblem {
    /// A configuration of the world being searched
    type State: Clone + Eq + Hash + Debug;
    /// A transition label, usually a small enum of moves
    type Action: Copy + Debug;

    /// Where the search begins.
    fn start_state(&self) -> Self::State;

    /// True if `state` satisfies the search's goal.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Every edge leaving `state`.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` in order from the start state. The algorithms never
    /// call this themselves. It exists so callers and tests can price a returned plan.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> N64;
}
