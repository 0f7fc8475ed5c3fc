//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are seated but no cards have been dealt.
    Ready,
    /// Cards have been dealt and a winner can be determined.
    Dealt,
}
