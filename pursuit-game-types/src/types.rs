//! Value types and the capability traits the engines are generic over.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of movement on the grid, or standing still.
///
/// `Stay` is always legal to *return*. Engines use it as the decision when a state offers no
/// real move, so callers never have to invent a direction out of thin air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Towards larger y
    North,
    /// Towards smaller y
    South,
    /// Towards larger x
    East,
    /// Towards smaller x
    West,
    /// Don't move this turn
    Stay,
}

impl Direction {
    /// All five directions, movement first. Iteration order here fixes the tie-break order of
    /// every deterministic engine, so don't shuffle it.
    pub fn all() -> [Direction; 5] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Stay,
        ]
    }

    /// The unit vector this direction moves along. `Stay` is the zero vector.
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::North => Vector { x: 0, y: 1 },
            Direction::South => Vector { x: 0, y: -1 },
            Direction::East => Vector { x: 1, y: 0 },
            Direction::West => Vector { x: -1, y: 0 },
            Direction::Stay => Vector { x: 0, y: 0 },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stay => "stay",
        };
        write!(f, "{name}")
    }
}

/// An offset between two grid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    /// x component
    pub x: i32,
    /// y component
    pub y: i32,
}

/// A position on the grid. The origin is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column, growing eastward
    pub x: i32,
    /// Row, growing northward
    pub y: i32,
}

impl Position {
    /// Returns the position offset by the given vector.
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    /// Manhattan distance to `other`. This is the metric every built-in heuristic and
    /// evaluation term uses.
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifies one agent inside a game state.
///
/// Agent 0 is always the player being controlled. Everything above it is a chaser, and turn
/// order cycles round-robin through the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl AgentId {
    /// The controlled player.
    pub const PLAYER: AgentId = AgentId(0);

    /// True for the player, false for every chaser.
    pub fn is_player(&self) -> bool {
        *self == AgentId::PLAYER
    }

    /// The raw index, for indexing into per-agent collections.
    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// The agent that moves after this one, wrapping back to the player once every chaser has
    /// moved.
    pub fn next(&self, agent_count: usize) -> AgentId {
        AgentId((self.0 + 1) % agent_count)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent {}", self.0)
    }
}

/// Everything an evaluation function needs to know about one chaser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChaserState {
    /// Where the chaser currently stands
    pub position: Position,
    /// How many more turns the chaser stays harmless. Zero means it is dangerous right now.
    pub harmless_turns: u32,
}

impl ChaserState {
    /// True while the chaser cannot hurt the player.
    pub fn is_harmless(&self) -> bool {
        self.harmless_turns > 0
    }
}

/// A game that knows how many agents are in it.
pub trait AgentCountableGame {
    /// Total number of agents, the player included. Always at least 1.
    fn agent_count(&self) -> usize;
}

/// A game that can enumerate moves and play them out.
///
/// Successor states are fresh values. Engines lean on that to explore the tree without ever
/// mutating the state their caller handed them.
pub trait SimulableGame: AgentCountableGame + Sized {
    /// The actions `agent` may take from this state. May be empty, for instance when the agent
    /// is boxed in.
    fn legal_actions(&self, agent: AgentId) -> Vec<Direction>;

    /// The state after `agent` takes `action`. Callers only pass actions that came out of
    /// [SimulableGame::legal_actions] for the same agent.
    fn generate_successor(&self, agent: AgentId, action: Direction) -> Self;
}

/// A game that knows whether it has ended.
pub trait OutcomeDeterminableGame {
    /// The player has won.
    fn is_win(&self) -> bool;

    /// The player has lost.
    fn is_lose(&self) -> bool;

    /// The game is over, either way.
    fn is_over(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// A game with a running score for the player.
pub trait ScoreGettableGame {
    /// The player's current score.
    fn score(&self) -> f64;
}

/// A game that can say where the player stands.
pub trait PlayerPositionGettableGame {
    /// The player's current position.
    fn player_position(&self) -> Position;
}

/// A game that can list the food still on the board.
pub trait FoodGettableGame {
    /// Positions of all remaining food.
    fn food_positions(&self) -> Vec<Position>;
}

/// A game that can list its chasers.
pub trait ChaserGettableGame {
    /// The current state of every chaser.
    fn chasers(&self) -> Vec<ChaserState>;
}
