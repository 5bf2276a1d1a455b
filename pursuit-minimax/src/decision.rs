use decorum::N64;
use pursuit_game_types::types::Direction;

/// What an engine settled on at the root of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The action the player should take now.
    ///
    /// When the root state is already terminal, or offers the player nothing legal to do,
    /// this is [`Direction::Stay`].
    pub action: Direction,
    /// The value the search backed up for that action.
    pub value: N64,
}
