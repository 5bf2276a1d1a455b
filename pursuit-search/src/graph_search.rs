use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use decorum::N64;
use rustc_hash::FxHashSet;
use tracing::{debug, debug_span};

use crate::heuristic::{null_heuristic, Heuristic};
use crate::problem::SearchProblem;

/// Search the deepest nodes in the frontier first.
///
/// The returned plan is the first one that reaches a goal, not necessarily the shortest or the
/// cheapest. `None` means the whole reachable graph was exhausted without finding a goal.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    debug_span!("depth_first_search").in_scope(|| uninformed_search(problem, Vec::new()))
}

/// Search the shallowest nodes in the frontier first.
///
/// Returns a plan with the fewest actions among all plans reaching a goal, or `None` if no goal
/// is reachable.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    debug_span!("breadth_first_search").in_scope(|| uninformed_search(problem, VecDeque::new()))
}

/// Search the node of least total path cost first.
///
/// Returns a cheapest plan, or `None` if no goal is reachable. Step costs must be
/// non-negative.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    debug_span!("uniform_cost_search")
        .in_scope(|| best_first_search(problem, &null_heuristic::<P>))
}

/// Search the node of least `path cost + heuristic estimate` first.
///
/// Returns a cheapest plan provided `heuristic` is admissible and consistent. That contract is
/// the caller's to uphold, see [Heuristic].
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    debug_span!("a_star_search").in_scope(|| best_first_search(problem, heuristic))
}

/// The open list for the uninformed searches. DFS and BFS run the exact same loop and differ
/// only in which end of the frontier gives up the next node.
trait Frontier<N> {
    fn push_node(&mut self, node: N);
    fn pop_node(&mut self) -> Option<N>;
}

impl<N> Frontier<N> for Vec<N> {
    fn push_node(&mut self, node: N) {
        self.push(node);
    }

    fn pop_node(&mut self) -> Option<N> {
        self.pop()
    }
}

impl<N> Frontier<N> for VecDeque<N> {
    fn push_node(&mut self, node: N) {
        self.push_back(node);
    }

    fn pop_node(&mut self) -> Option<N> {
        self.pop_front()
    }
}

fn uninformed_search<P, F>(problem: &P, mut frontier: F) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    F: Frontier<(P::State, Vec<P::Action>)>,
{
    let mut expanded_states: FxHashSet<P::State> = FxHashSet::default();
    let mut expansions = 0_usize;

    frontier.push_node((problem.start_state(), vec![]));

    while let Some((state, path)) = frontier.pop_node() {
        // Duplicates are pruned lazily here rather than eagerly at push time, so a state can
        // sit in the frontier many times but only its first pop is ever expanded.
        if expanded_states.contains(&state) {
            continue;
        }
        expanded_states.insert(state.clone());
        expansions += 1;

        if problem.is_goal_state(&state) {
            debug!(expansions, plan_len = path.len(), "reached a goal state");
            return Some(path);
        }

        for successor in problem.successors(&state) {
            let mut next_path = path.clone();
            next_path.push(successor.action);
            frontier.push_node((successor.state, next_path));
        }
    }

    debug!(expansions, "exhausted the frontier without finding a goal");
    None
}

struct HeapEntry<S, A> {
    priority: N64,
    seq: u64,
    state: S,
    path: Vec<A>,
    cost: N64,
}

// The priority queue depends on `Ord`. Explicitly implement the trait so the queue becomes a
// min-heap instead of a max-heap.
impl<S, A> Ord for HeapEntry<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on priorities. Ties fall back to the insertion
        // sequence number, also flipped, so equal priorities pop oldest first. The sequence
        // number is unique per entry, which keeps `PartialEq` and `Ord` consistent.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

// `PartialOrd` needs to be implemented as well.
impl<S, A> PartialOrd for HeapEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> PartialEq for HeapEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<S, A> Eq for HeapEntry<S, A> {}

fn best_first_search<P, H>(problem: &P, heuristic: &H) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    let mut expanded_states: FxHashSet<P::State> = FxHashSet::default();
    let mut expansions = 0_usize;
    let mut seq = 0_u64;

    let mut to_search: BinaryHeap<HeapEntry<P::State, P::Action>> = BinaryHeap::new();

    let start = problem.start_state();
    to_search.push(HeapEntry {
        priority: heuristic.estimate(&start, problem),
        seq,
        state: start,
        path: vec![],
        cost: N64::from(0.0),
    });

    while let Some(HeapEntry {
        state, path, cost, ..
    }) = to_search.pop()
    {
        if expanded_states.contains(&state) {
            continue;
        }
        expanded_states.insert(state.clone());
        expansions += 1;

        if problem.is_goal_state(&state) {
            debug!(
                expansions,
                plan_len = path.len(),
                plan_cost = ?cost,
                "reached a goal state"
            );
            return Some(path);
        }

        for successor in problem.successors(&state) {
            let mut next_path = path.clone();
            next_path.push(successor.action);
            let next_cost = cost + successor.cost;

            seq += 1;
            to_search.push(HeapEntry {
                priority: next_cost + heuristic.estimate(&successor.state, problem),
                seq,
                state: successor.state,
                path: next_path,
                cost: next_cost,
            });
        }
    }

    debug!(expansions, "exhausted the frontier without finding a goal");
    None
}
