//! The draw pile.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS};

/// Returns the full pack in a uniformly random order.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Card::all();
    cards.shuffle(rng);
    cards
}

/// An ordered pile of cards, drawn front to back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a freshly shuffled full deck.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_cards(shuffle(rng))
    }

    /// Creates a deck that draws `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Removes and returns the front card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the card that will be drawn last.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns whether the deck holds every card of the pack exactly once.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.cards.len() != DECK_SIZE {
            return false;
        }
        let mut sorted: Vec<Card> = self.cards.iter().copied().collect();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len() == DECK_SIZE && sorted.iter().all(|c| (1..=RANKS).contains(&c.rank))
    }
}
