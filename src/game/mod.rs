//! Game engine and state management.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GameError;
use crate::options::{GameOptions, REQUIRED_PLAYERS};
use crate::player::Player;

mod play;
pub mod state;

pub use state::GameState;

/// A two-player card game.
///
/// The game owns its players and a seeded random number generator. Each
/// [`Game::play`] builds a fresh deck, deals from it and drops it; the
/// players keep their hands so scores can be inspected afterwards.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Players in seating order.
    players: [Player; REQUIRED_PLAYERS],
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerCount`] unless
    /// `options.player_count` is exactly two.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Game, GameError, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    ///
    /// let err = Game::new(GameOptions::default().with_player_count(3), 42).unwrap_err();
    /// assert_eq!(err, GameError::InvalidPlayerCount(3));
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        if options.player_count != REQUIRED_PLAYERS {
            return Err(GameError::InvalidPlayerCount(options.player_count));
        }

        debug!(
            "new game: players={} sort_deck={} cards_per_player={} seed={seed}",
            options.player_count, options.sort_deck, options.cards_per_player
        );

        Ok(Self {
            options,
            players: [Player::new(1), Player::new(2)],
            state: GameState::Ready,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index` (zero-based), if any.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }
}
