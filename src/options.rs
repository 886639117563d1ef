//! Game configuration options.

/// Whether the game is played locally or against remote players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// One human against computer seats.
    #[default]
    Singleplayer,
    /// Several humans sharing the table.
    Multiplayer,
}

/// Configuration options for a Briscola table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use briscola::GameOptions;
///
/// let options = GameOptions::default()
///     .with_seats(4)
///     .with_starter_seat(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of seats at the table (2 or 4).
    pub seats: usize,
    /// Cards dealt to each seat, and kept in hand while the deck lasts.
    pub hand_size: usize,
    /// Seat that leads the first trick.
    pub starter_seat: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seats: 2,
            hand_size: 3,
            starter_seat: 0,
        }
    }
}

impl GameOptions {
    /// Sets the number of seats.
    ///
    /// # Example
    ///
    /// ```
    /// use briscola::GameOptions;
    ///
    /// let options = GameOptions::default().with_seats(4);
    /// assert_eq!(options.seats, 4);
    /// ```
    #[must_use]
    pub const fn with_seats(mut self, seats: usize) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the hand size.
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the seat that leads the first trick.
    ///
    /// # Example
    ///
    /// ```
    /// use briscola::GameOptions;
    ///
    /// let options = GameOptions::default().with_starter_seat(1);
    /// assert_eq!(options.starter_seat, 1);
    /// ```
    #[must_use]
    pub const fn with_starter_seat(mut self, starter_seat: usize) -> Self {
        self.starter_seat = starter_seat;
        self
    }
}
