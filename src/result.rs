//! Trick result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Result of ending a trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickOutcome {
    /// Seat that took the trick and leads the next one.
    pub winner: usize,
    /// Cards collected by the winner, as `(seat, card)` in seat order.
    pub cards: Vec<(usize, Card)>,
    /// Whether this was the last trick of the game.
    pub game_over: bool,
}

impl TrickOutcome {
    /// Returns the point value of the collected cards.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|(_, c)| u32::from(c.points())).sum()
    }
}
