use decorum::N64;

use crate::problem::SearchProblem;

/// Estimates the remaining cost from a state to the nearest goal.
///
/// [a_star_search](crate::graph_search::a_star_search) is only optimal when the estimate is
/// admissible (never overestimates the true remaining cost) and consistent (satisfies the
/// triangle inequality along every edge). Neither property is checked at runtime. Feeding in a
/// heuristic that breaks them silently produces suboptimal plans.
///
/// Plain functions and closures of the right shape already implement this, so most callers
/// never write an `impl` by hand.
pub trait Heuristic<P: SearchProblem> {
    /// Estimated cost-to-go from `state`.
    fn estimate(&self, state: &P::State, problem: &P) -> N64;
}

impl<P: SearchProblem, FnLike: Fn(&P::State, &P) -> N64> Heuristic<P> for FnLike {
    fn estimate(&self, state: &P::State, problem: &P) -> N64 {
        (self)(state, problem)
    }
}

/// The zero estimate. A* with this heuristic is exactly uniform-cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> N64 {
    N64::from(0.0)
}
