//! Scripted game trees for exercising the engines.

use std::cell::Cell;
use std::rc::Rc;

use decorum::N64;
use pursuit_game_types::types::{
    AgentCountableGame, AgentId, Direction, OutcomeDeterminableGame, ScoreGettableGame,
    SimulableGame,
};
use rand::rngs::StdRng;
use rand::Rng;

/// One node of a scripted tree, in builder form.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    score: f64,
    win: bool,
    lose: bool,
    to_move: usize,
    children: Vec<(Direction, Node)>,
}

impl Node {
    pub(crate) fn leaf(score: f64) -> Node {
        Node {
            score,
            win: false,
            lose: false,
            to_move: 0,
            children: vec![],
        }
    }

    pub(crate) fn win(score: f64) -> Node {
        Node {
            win: true,
            ..Node::leaf(score)
        }
    }

    pub(crate) fn lose(score: f64) -> Node {
        Node {
            lose: true,
            ..Node::leaf(score)
        }
    }

    pub(crate) fn branch(to_move: usize, children: Vec<(Direction, Node)>) -> Node {
        Node {
            score: 0.0,
            win: false,
            lose: false,
            to_move,
            children,
        }
    }

    pub(crate) fn with_score(mut self, score: f64) -> Node {
        self.score = score;
        self
    }

    pub(crate) fn with_children(
        mut self,
        to_move: usize,
        children: Vec<(Direction, Node)>,
    ) -> Node {
        self.to_move = to_move;
        self.children = children;
        self
    }
}

#[derive(Debug)]
struct FlatNode {
    score: f64,
    win: bool,
    lose: bool,
    to_move: usize,
    edges: Vec<(Direction, usize)>,
}

fn flatten(node: Node, nodes: &mut Vec<FlatNode>) -> usize {
    let index = nodes.len();
    nodes.push(FlatNode {
        score: node.score,
        win: node.win,
        lose: node.lose,
        to_move: node.to_move,
        edges: vec![],
    });

    let mut edges = vec![];
    for (action, child) in node.children {
        let target = flatten(child, nodes);
        edges.push((action, target));
    }
    nodes[index].edges = edges;

    index
}

/// A game whose whole tree is written out ahead of time.
///
/// Successors just hop along scripted edges, and the shared counter remembers how many hops
/// the engines asked for. Branch nodes know whose turn it is and panic if an engine asks out
/// of turn, so any turn-cycling mistake fails loudly in every test that uses a fixture.
#[derive(Debug, Clone)]
pub(crate) struct FixtureTree {
    nodes: Rc<Vec<FlatNode>>,
    current: usize,
    agent_count: usize,
    simulations: Rc<Cell<usize>>,
}

impl FixtureTree {
    pub(crate) fn new(agent_count: usize, root: Node) -> Self {
        let mut nodes = vec![];
        flatten(root, &mut nodes);

        FixtureTree {
            nodes: Rc::new(nodes),
            current: 0,
            agent_count,
            simulations: Rc::new(Cell::new(0)),
        }
    }

    /// How many successor states have been generated anywhere in this tree so far.
    pub(crate) fn simulations(&self) -> usize {
        self.simulations.get()
    }
}

impl AgentCountableGame for FixtureTree {
    fn agent_count(&self) -> usize {
        self.agent_count
    }
}

impl SimulableGame for FixtureTree {
    fn legal_actions(&self, agent: AgentId) -> Vec<Direction> {
        let node = &self.nodes[self.current];
        // Leaves answer any agent with an empty list.
        if !node.edges.is_empty() {
            assert_eq!(agent.as_usize(), node.to_move, "asked for actions out of turn");
        }

        node.edges.iter().map(|&(action, _)| action).collect()
    }

    fn generate_successor(&self, agent: AgentId, action: Direction) -> Self {
        let node = &self.nodes[self.current];
        assert_eq!(agent.as_usize(), node.to_move, "simulated a move out of turn");

        let &(_, target) = node
            .edges
            .iter()
            .find(|&&(candidate, _)| candidate == action)
            .expect("simulated an action the node does not offer");

        self.simulations.set(self.simulations.get() + 1);

        FixtureTree {
            nodes: Rc::clone(&self.nodes),
            current: target,
            agent_count: self.agent_count,
            simulations: Rc::clone(&self.simulations),
        }
    }
}

impl OutcomeDeterminableGame for FixtureTree {
    fn is_win(&self) -> bool {
        self.nodes[self.current].win
    }

    fn is_lose(&self) -> bool {
        self.nodes[self.current].lose
    }
}

impl ScoreGettableGame for FixtureTree {
    fn score(&self) -> f64 {
        self.nodes[self.current].score
    }
}

/// The evaluator every fixture test reaches for: the node's scripted score.
pub(crate) fn by_score(game: &FixtureTree) -> N64 {
    N64::from(game.score())
}

/// A random tree exactly `rounds` rounds deep for `agent_count` agents, with integer scores
/// and the odd early win or loss sprinkled in.
pub(crate) fn random_tree(rng: &mut StdRng, agent_count: usize, rounds: usize) -> Node {
    build_random(rng, agent_count, rounds * agent_count, 0)
}

fn build_random(
    rng: &mut StdRng,
    agent_count: usize,
    plies_left: usize,
    to_move: usize,
) -> Node {
    let score = rng.gen_range(-20..=20) as f64;

    if plies_left == 0 {
        return Node::leaf(score);
    }

    // A thin chance of an early game end keeps the terminal checks honest.
    if rng.gen_bool(0.05) {
        return if rng.gen_bool(0.5) {
            Node::win(score)
        } else {
            Node::lose(score)
        };
    }

    let actions = [Direction::North, Direction::South, Direction::East];
    let branching = rng.gen_range(1..=actions.len());
    let children = actions
        .iter()
        .take(branching)
        .map(|&action| {
            let child = build_random(
                rng,
                agent_count,
                plies_left - 1,
                (to_move + 1) % agent_count,
            );
            (action, child)
        })
        .collect();

    Node::branch(to_move, children).with_score(score)
}
