//! A Briscola trick-taking card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the deck, the trump card,
//! every seat's hand and won cards, turn order, and trick resolution for a
//! table of human and computer-controlled seats.
//!
//! # Example
//!
//! ```
//! use briscola::{ControlMode, FirstCard, Game, GameMode, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).with_strategy(FirstCard);
//! game.initialize(GameMode::Singleplayer, 2, &[ControlMode::Human, ControlMode::Computer])
//!     .unwrap();
//!
//! let card = game.players()[0].hand()[0];
//! game.play_card(0, Some(card)).unwrap();
//! assert_eq!(game.state(), GameState::TrickComplete);
//!
//! let outcome = game.end_trick().unwrap();
//! assert_eq!(outcome.cards.len(), 2);
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
pub mod strategy;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit, TOTAL_POINTS};
pub use deck::Deck;
pub use error::{PlayError, SetupError, StrategyError, TrickError};
pub use game::{Game, GameState};
pub use options::{GameMode, GameOptions};
pub use player::{ControlMode, Player};
pub use result::TrickOutcome;
pub use strategy::{FirstCard, PlayView, RandomStrategy, Strategy};
pub use trick::Trick;
