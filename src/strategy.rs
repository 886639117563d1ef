//! Card choice for computer-controlled seats.
//!
//! The engine asks a [`Strategy`] which card a computer seat plays. The
//! strategy sees a read-only [`PlayView`] and answers with an index into
//! the acting seat's hand; the engine bounds-checks the answer before
//! moving any card.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::trick::Trick;

/// What a computer seat can see when choosing a card.
#[derive(Debug, Clone, Copy)]
pub struct PlayView<'a> {
    /// The seat that must play.
    pub seat: usize,
    /// Every seat's hand, indexed by seat.
    pub hands: &'a [Vec<Card>],
    /// The cards on the table.
    pub table: &'a Trick,
    /// The trump card.
    pub trump: Card,
}

impl PlayView<'_> {
    /// Returns the acting seat's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.hands.get(self.seat).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Chooses which card a computer-controlled seat plays.
pub trait Strategy {
    /// Returns an index into `view.hand()`.
    ///
    /// The index must be in bounds; the engine rejects anything else as a
    /// [`StrategyError`](crate::error::StrategyError).
    fn choose_card(&mut self, view: &PlayView<'_>) -> usize;
}

impl<F> Strategy for F
where
    F: FnMut(&PlayView<'_>) -> usize,
{
    fn choose_card(&mut self, view: &PlayView<'_>) -> usize {
        self(view)
    }
}

/// Always plays the first card in hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCard;

impl Strategy for FirstCard {
    fn choose_card(&mut self, _view: &PlayView<'_>) -> usize {
        0
    }
}

/// Plays a uniformly random card from hand.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a strategy seeded for reproducible choices.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_card(&mut self, view: &PlayView<'_>) -> usize {
        match view.hand().len() {
            0 => 0,
            len => self.rng.random_range(0..len),
        }
    }
}
