use decorum::N64;

/// This trait turns a game state into the number the engines maximize.
///
/// The engines call it on every state at the frontier of the lookahead, so it sees plenty of
/// mid-game positions and should stay cheap. Bigger is always better for the player.
pub trait Evaluator<GameType> {
    /// Score the given state from the player's point of view.
    fn evaluate(&self, state: &GameType) -> N64;
}

impl<GameType, FnLike: Fn(&GameType) -> N64> Evaluator<GameType> for FnLike {
    fn evaluate(&self, state: &GameType) -> N64 {
        (self)(state)
    }
}
