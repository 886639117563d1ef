//! Shared helpers for integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use briscola::{Card, Deck, Game};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber filtered by `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Builds a deck that deals `draws` first and ends with `trump`.
pub fn rigged_deck(draws: &[Card], trump: Card) -> Deck {
    let mut cards = draws.to_vec();
    cards.extend(
        Card::all()
            .into_iter()
            .filter(|c| *c != trump && !draws.contains(c)),
    );
    cards.push(trump);
    Deck::from_cards(cards)
}

/// Every card the game knows about: deck, hands, won piles and table.
pub fn all_cards(game: &Game) -> Vec<Card> {
    let mut cards: Vec<Card> = game.deck().iter().copied().collect();
    for player in game.players() {
        cards.extend_from_slice(player.hand());
        cards.extend_from_slice(player.won_cards());
    }
    cards.extend(game.table().cards().map(|(_, c)| c));
    cards
}

/// Asserts that the 40 cards are all accounted for exactly once.
pub fn assert_conserved(game: &Game) {
    let mut cards = all_cards(game);
    cards.sort_unstable();
    let mut pack = Card::all();
    pack.sort_unstable();
    assert_eq!(cards, pack);
    if let Some(trump) = game.trump_card() {
        assert!(cards.contains(&trump));
    }
}
