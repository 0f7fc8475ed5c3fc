//! Game configuration options.

/// Number of players the game supports.
pub const REQUIRED_PLAYERS: usize = 2;

/// Configuration options for a card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use highcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_sort_deck(true)
///     .with_cards_per_player(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players. Only [`REQUIRED_PLAYERS`] is accepted.
    pub player_count: usize,
    /// Whether to sort the deck after shuffling it.
    pub sort_deck: bool,
    /// Number of cards dealt to each player.
    pub cards_per_player: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_count: REQUIRED_PLAYERS,
            sort_deck: false,
            cards_per_player: 3,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_count(3);
    /// assert_eq!(options.player_count, 3);
    /// ```
    #[must_use]
    pub const fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Sets whether the deck is sorted after shuffling.
    ///
    /// A sorted deck makes the deal order independent of the shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_sort_deck(true);
    /// assert!(options.sort_deck);
    /// ```
    #[must_use]
    pub const fn with_sort_deck(mut self, sort_deck: bool) -> Self {
        self.sort_deck = sort_deck;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_per_player(10);
    /// assert_eq!(options.cards_per_player, 10);
    /// ```
    #[must_use]
    pub const fn with_cards_per_player(mut self, cards_per_player: usize) -> Self {
        self.cards_per_player = cards_per_player;
        self
    }

    /// Total number of cards a play tries to deal.
    #[must_use]
    pub const fn cards_to_deal(&self) -> usize {
        self.player_count.saturating_mul(self.cards_per_player)
    }
}
