//! The 52-card deck.

use alloc::collections::VecDeque;

use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};

/// An ordered deck of playing cards.
///
/// The front of the deck is the top: [`Deck::deal`] removes cards from
/// there. A fresh deck holds one card for every rank and suit, grouped by
/// suit in [`Suit::ALL`] order with ranks ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds a full, unshuffled deck.
    ///
    /// ```
    /// use highcard::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push_back(Card::from_parts(rank, suit));
            }
        }

        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        self.trace_order("shuffled");
    }

    /// Sorts the deck in place, by suit weight first and rank second.
    ///
    /// The sort is stable, so applying it to an already sorted deck leaves
    /// the order untouched.
    ///
    /// ```
    /// use highcard::{Deck, Suit};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    /// deck.sort();
    /// let top = deck.deal().unwrap();
    /// assert_eq!((top.rank(), top.suit()), (2, Suit::Spades));
    /// ```
    pub fn sort(&mut self) {
        let cards = self.cards.make_contiguous();
        cards.sort_by_key(Card::rank);
        cards.sort_by_key(|card| card.suit().weight());
        self.trace_order("sorted");
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` once the deck is empty; dealing from an empty deck is
    /// not an error.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    fn trace_order(&self, label: &str) {
        if log::log_enabled!(log::Level::Trace) {
            for (position, card) in self.cards.iter().enumerate() {
                trace!("{label} deck[{position}] = {card}");
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
