//! Player hands and scores.

use core::cmp::Ordering;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// A player holding dealt cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name, e.g. `Player 1`.
    name: String,
    /// Cards in deal order.
    hand: Vec<Card>,
    /// Sum of the values of `hand`.
    score: u32,
}

impl Player {
    /// Creates a player named `Player {index}` with an empty hand.
    ///
    /// ```
    /// use highcard::Player;
    ///
    /// assert_eq!(Player::new(1).name(), "Player 1");
    /// ```
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            name: format!("Player {index}"),
            hand: Vec::new(),
            score: 0,
        }
    }

    /// Adds a card to the hand and its value to the score.
    pub fn add_card(&mut self, card: Card) {
        self.score += card.value();
        self.hand.push(card);
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards received, in deal order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Compares two players by score.
    #[must_use]
    pub fn compare_score(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }

    /// Returns whether this player's score is strictly higher.
    #[must_use]
    pub fn outscores(&self, other: &Self) -> bool {
        self.compare_score(other) == Ordering::Greater
    }

    /// Empties the hand and resets the score.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.score = 0;
    }
}
