//! Seated players and their hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Who supplies a seat's plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// Plays are supplied by the caller.
    Human,
    /// Plays are chosen by the engine's [`Strategy`](crate::strategy::Strategy).
    Computer,
}

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Position in turn order.
    seat: usize,
    /// Control mode of the seat.
    control: ControlMode,
    /// Cards in hand, in draw order.
    hand: Vec<Card>,
    /// Cards collected from won tricks.
    won: Vec<Card>,
}

impl Player {
    /// Creates a player holding the given starting hand.
    #[must_use]
    pub const fn new(seat: usize, control: ControlMode, hand: Vec<Card>) -> Self {
        Self {
            seat,
            control,
            hand,
            won: Vec::new(),
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn seat(&self) -> usize {
        self.seat
    }

    /// Returns the control mode.
    #[must_use]
    pub const fn control(&self) -> ControlMode {
        self.control
    }

    /// Returns whether the engine plays for this seat.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.control == ControlMode::Computer
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards won so far.
    #[must_use]
    pub fn won_cards(&self) -> &[Card] {
        &self.won
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Adds a drawn card to the hand.
    pub(crate) fn add_card(&mut self, card: Card) {
        debug_assert!(!self.hand.contains(&card), "duplicate card in hand");
        self.hand.push(card);
    }

    /// Removes `card` from the hand, preserving the order of the rest.
    pub(crate) fn take_card(&mut self, card: &Card) -> Option<Card> {
        let index = self.hand.iter().position(|c| c == card)?;
        Some(self.hand.remove(index))
    }

    /// Removes the card at `index`, preserving the order of the rest.
    pub(crate) fn take_at(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Adds the cards of a won trick.
    pub(crate) fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.won.extend(cards);
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
