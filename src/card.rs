//! Card types and deck constants.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
///
/// Variants are declared in ascending weight order, which is also the order
/// suits are laid out when a fresh deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades (weight 1).
    Spades,
    /// Diamonds (weight 2).
    Diamonds,
    /// Hearts (weight 3).
    Hearts,
    /// Clubs (weight 4).
    Clubs,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Hearts, Self::Clubs];

    /// Returns the scoring weight of the suit.
    ///
    /// ```
    /// use highcard::Suit;
    ///
    /// assert_eq!(Suit::Spades.weight(), 1);
    /// assert_eq!(Suit::Clubs.weight(), 4);
    /// ```
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Spades => 1,
            Self::Diamonds => 2,
            Self::Hearts => 3,
            Self::Clubs => 4,
        }
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(CardError::InvalidSuit)
    }
}

/// Lowest legal rank (a two).
pub const MIN_RANK: u8 = 2;

/// Highest legal rank (an ace).
pub const MAX_RANK: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Ranks 2 through 10 are pip cards; 11, 12, 13 and 14 are Jack, Queen, King
/// and Ace. A card cannot change once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `2..=14`.
    ///
    /// ```
    /// use highcard::{Card, CardError, Suit};
    ///
    /// let king = Card::new(13, Suit::Spades).unwrap();
    /// assert_eq!(king.to_string(), "King of Spades");
    /// assert_eq!(Card::new(15, Suit::Spades), Err(CardError::InvalidRank(15)));
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    /// Builds a card whose rank is already known to be in range.
    pub(crate) const fn from_parts(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank >= MIN_RANK && rank <= MAX_RANK);
        Self { rank, suit }
    }

    /// Returns the rank (2..=14).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the scoring value: rank multiplied by suit weight.
    ///
    /// ```
    /// use highcard::{Card, Suit};
    ///
    /// assert_eq!(Card::new(2, Suit::Clubs).unwrap().value(), 8);
    /// assert_eq!(Card::new(14, Suit::Hearts).unwrap().value(), 42);
    /// ```
    #[must_use]
    pub fn value(&self) -> u32 {
        u32::from(self.rank) * u32::from(self.suit.weight())
    }

    /// Returns the face name for Jack through Ace, `None` for pip cards.
    #[must_use]
    pub const fn face_name(&self) -> Option<&'static str> {
        match self.rank {
            11 => Some("Jack"),
            12 => Some("Queen"),
            13 => Some("King"),
            14 => Some("Ace"),
            _ => None,
        }
    }

    /// Compares two cards.
    ///
    /// Cards of the same suit compare by rank. Cards of different suits
    /// compare by suit weight alone, so any Diamond beats any Spade no matter
    /// the ranks. This is not the same as comparing [`Card::value`].
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use highcard::{Card, Suit};
    ///
    /// let four_hearts = Card::new(4, Suit::Hearts).unwrap();
    /// let five_diamonds = Card::new(5, Suit::Diamonds).unwrap();
    /// assert_eq!(four_hearts.compare(&five_diamonds), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.suit == other.suit {
            self.rank.cmp(&other.rank)
        } else {
            self.suit.weight().cmp(&other.suit.weight())
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face_name() {
            Some(face) => write!(f, "{face} of {}", self.suit),
            None => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}
