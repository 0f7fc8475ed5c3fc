//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The requested player count is not the supported one.
    #[error("incorrect player count specified: expected 2, got {0}")]
    InvalidPlayerCount(usize),
}

/// Errors that can occur while building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `2..=14`.
    #[error("invalid card rank {0}, expected 2 through 14")]
    InvalidRank(u8),
    /// Suit name not recognised.
    #[error("invalid card suit")]
    InvalidSuit,
}
