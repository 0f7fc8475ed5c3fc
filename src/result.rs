//! Outcome of dealing a game.

/// Summary of a single [`Game::play`](crate::Game::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    /// Cards handed out to players.
    pub cards_dealt: usize,
    /// Cards left in the deck afterwards.
    pub cards_remaining: usize,
    /// Whether the deck ran out before every player got their share.
    pub deck_exhausted: bool,
}
