//! The cards on the table for the trick in progress.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// One slot per seat holding the card that seat played, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trick {
    /// Played card per seat.
    slots: Vec<Option<Card>>,
    /// Whether each seat has played in this trick.
    played: Vec<bool>,
}

impl Trick {
    /// Creates an empty trick for `seats` players.
    #[must_use]
    pub fn new(seats: usize) -> Self {
        Self {
            slots: alloc::vec![None; seats],
            played: alloc::vec![false; seats],
        }
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn seats(&self) -> usize {
        self.slots.len()
    }

    /// Returns the card played by `seat`, if any.
    #[must_use]
    pub fn card(&self, seat: usize) -> Option<Card> {
        self.slots.get(seat).copied().flatten()
    }

    /// Returns the per-seat slots.
    #[must_use]
    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// Returns whether `seat` has played in this trick.
    #[must_use]
    pub fn has_played(&self, seat: usize) -> bool {
        self.played.get(seat).copied().unwrap_or(false)
    }

    /// Returns whether every seat has played.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.played.is_empty() && self.played.iter().all(|&p| p)
    }

    /// Returns whether no seat has played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.played.iter().all(|&p| !p)
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.played.iter().filter(|&&p| p).count()
    }

    /// Iterates `(seat, card)` for every played slot in seat order.
    pub fn cards(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(seat, slot)| slot.map(|card| (seat, card)))
    }

    /// Places `card` in the slot of `seat`.
    pub(crate) fn place(&mut self, seat: usize, card: Card) {
        debug_assert!(!self.played[seat], "seat {seat} already played");
        self.slots[seat] = Some(card);
        self.played[seat] = true;
    }

    /// Empties every slot and returns the cards that were on the table.
    pub(crate) fn clear(&mut self) -> Vec<(usize, Card)> {
        let cards = self.cards().collect();
        self.slots.fill(None);
        self.played.fill(false);
        cards
    }

    /// Returns the seat that takes the trick, or `None` if no card is down.
    ///
    /// Scanning in seat order, the first card is the candidate. A later card
    /// replaces it when it is trump and the candidate is not, or when it
    /// shares the candidate's suit and outranks it on points, rank breaking
    /// point ties. Cards of any other suit never win.
    #[must_use]
    pub fn winner(&self, trump: Suit) -> Option<usize> {
        let mut cards = self.cards();
        let (mut best_seat, mut best) = cards.next()?;

        for (seat, card) in cards {
            if beats(card, best, trump) {
                best_seat = seat;
                best = card;
            }
        }

        Some(best_seat)
    }
}

fn beats(challenger: Card, candidate: Card, trump: Suit) -> bool {
    if challenger.suit == trump && candidate.suit != trump {
        return true;
    }
    challenger.suit == candidate.suit
        && (challenger.points(), challenger.rank) > (candidate.points(), candidate.rank)
}
