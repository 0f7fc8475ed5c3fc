//! A two-player high-score card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that builds a standard 52-card
//! [`Deck`], shuffles (and optionally sorts) it, deals cards round-robin to
//! two [`Player`]s and picks the one with the higher score. Each card scores
//! its rank multiplied by a suit weight (Spades 1, Diamonds 2, Hearts 3,
//! Clubs 4).
//!
//! # Example
//!
//! ```
//! use highcard::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.play();
//! println!("{} wins!", game.determine_winner());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::{CardError, GameError};
pub use game::{Game, GameState};
pub use options::{GameOptions, REQUIRED_PLAYERS};
pub use player::Player;
pub use result::PlayResult;
