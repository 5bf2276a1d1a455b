//! A small concrete pursuit game for integration tests.
//!
//! The production crates only ever see this game through the capability traits; this module
//! is the stand-in for the real game engine that hosts them.

use pursuit_game_types::types::{
    AgentCountableGame, AgentId, ChaserGettableGame, ChaserState, Direction, FoodGettableGame,
    OutcomeDeterminableGame, PlayerPositionGettableGame, Position, ScoreGettableGame,
    SimulableGame,
};

// Arcade-style bookkeeping: a point of hurry-up per player move, ten per pellet, five
// hundred for clearing the board or getting caught.
const MOVE_PENALTY: f64 = 1.0;
const FOOD_REWARD: f64 = 10.0;
const WIN_REWARD: f64 = 500.0;
const LOSE_PENALTY: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct GridGame {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Position>,
    pub player: Position,
    pub food: Vec<Position>,
    pub chasers: Vec<ChaserState>,
    pub score: f64,
    pub over: Option<Outcome>,
}

impl GridGame {
    /// Build a board from rows of `#` wall, `.` food, `P` player, `C` chaser, space empty.
    /// Rows are written top-down; `y` grows upward.
    pub fn parse(map: &str) -> GridGame {
        let rows: Vec<&str> = map.lines().filter(|line| !line.trim().is_empty()).collect();
        let height = rows.len() as i32;
        let width = rows.iter().map(|row| row.trim().len()).max().unwrap_or(0) as i32;

        let mut walls = vec![];
        let mut food = vec![];
        let mut player = None;
        let mut chasers = vec![];

        for (row_index, row) in rows.iter().enumerate() {
            let y = height - 1 - row_index as i32;
            for (column, cell) in row.trim().chars().enumerate() {
                let position = Position {
                    x: column as i32,
                    y,
                };
                match cell {
                    '#' => walls.push(position),
                    '.' => food.push(position),
                    'P' => player = Some(position),
                    'C' => chasers.push(ChaserState {
                        position,
                        harmless_turns: 0,
                    }),
                    _ => {}
                }
            }
        }

        GridGame {
            width,
            height,
            walls,
            player: player.expect("the map needs a P somewhere"),
            food,
            chasers,
            score: 0.0,
            over: None,
        }
    }

    pub fn passable(&self, position: &Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width
            && position.y < self.height
            && !self.walls.contains(position)
    }

    fn moves_from(&self, origin: Position) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|direction| self.passable(&origin.add_vec(direction.to_vector())))
            .collect()
    }
}

impl AgentCountableGame for GridGame {
    fn agent_count(&self) -> usize {
        1 + self.chasers.len()
    }
}

impl SimulableGame for GridGame {
    fn legal_actions(&self, agent: AgentId) -> Vec<Direction> {
        if self.over.is_some() {
            return vec![];
        }

        let origin = if agent.is_player() {
            self.player
        } else {
            self.chasers[agent.as_usize() - 1].position
        };

        self.moves_from(origin)
    }

    fn generate_successor(&self, agent: AgentId, action: Direction) -> Self {
        let mut next = self.clone();

        if agent.is_player() {
            next.player = next.player.add_vec(action.to_vector());
            next.score -= MOVE_PENALTY;

            if let Some(index) = next.food.iter().position(|food| *food == next.player) {
                next.food.remove(index);
                next.score += FOOD_REWARD;
            }

            if next.food.is_empty() {
                next.score += WIN_REWARD;
                next.over = Some(Outcome::Won);
            } else if next
                .chasers
                .iter()
                .any(|chaser| !chaser.is_harmless() && chaser.position == next.player)
            {
                next.score -= LOSE_PENALTY;
                next.over = Some(Outcome::Lost);
            }
        } else {
            let index = agent.as_usize() - 1;
            let was_harmless = next.chasers[index].is_harmless();

            next.chasers[index].position =
                next.chasers[index].position.add_vec(action.to_vector());

            if !was_harmless && next.chasers[index].position == next.player {
                next.score -= LOSE_PENALTY;
                next.over = Some(Outcome::Lost);
            }

            next.chasers[index].harmless_turns =
                next.chasers[index].harmless_turns.saturating_sub(1);
        }

        next
    }
}

impl OutcomeDeterminableGame for GridGame {
    fn is_win(&self) -> bool {
        matches!(self.over, Some(Outcome::Won))
    }

    fn is_lose(&self) -> bool {
        matches!(self.over, Some(Outcome::Lost))
    }
}

impl ScoreGettableGame for GridGame {
    fn score(&self) -> f64 {
        self.score
    }
}

impl PlayerPositionGettableGame for GridGame {
    fn player_position(&self) -> Position {
        self.player
    }
}

impl FoodGettableGame for GridGame {
    fn food_positions(&self) -> Vec<Position> {
        self.food.clone()
    }
}

impl ChaserGettableGame for GridGame {
    fn chasers(&self) -> Vec<ChaserState> {
        self.chasers.clone()
    }
}
