use pursuit_game_types::types::AgentId;

/// Where we are in the turn order: whose move it is and how many full rounds have finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ply {
    pub(crate) agent: AgentId,
    pub(crate) rounds: usize,
}

impl Ply {
    /// The root of the tree, with the player to move and no rounds completed.
    pub(crate) fn root() -> Self {
        Self {
            agent: AgentId::PLAYER,
            rounds: 0,
        }
    }

    /// Hand the turn to the next agent. The round counter only moves when the turn order
    /// wraps back around to the player.
    pub(crate) fn next(&self, agent_count: usize) -> Self {
        let agent = self.agent.next(agent_count);
        let rounds = if agent.is_player() {
            self.rounds + 1
        } else {
            self.rounds
        };

        Self { agent, rounds }
    }
}
