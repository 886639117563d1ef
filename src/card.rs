//! Card types and the Italian 40-card pack.

use core::fmt;

/// Card suit of the Italian pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Batons (bastoni).
    Batons,
    /// Coins (denari).
    Coins,
    /// Cups (coppe).
    Cups,
    /// Swords (spade).
    Swords,
}

impl Suit {
    /// All suits in pack order.
    pub const ALL: [Self; 4] = [Self::Batons, Self::Coins, Self::Cups, Self::Swords];

    /// Returns the lowercase English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Batons => "batons",
            Self::Coins => "coins",
            Self::Cups => "cups",
            Self::Swords => "swords",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Equality is by suit and rank. Point values are derived from the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 8 = Jack, 9 = Knight, 10 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside
    /// `1..=RANKS` are accepted but are worth no points and never appear in
    /// a dealt pack.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the point value of the card.
    #[must_use]
    pub const fn points(&self) -> u8 {
        card_points(self.rank)
    }

    /// Returns whether the card belongs to the given suit.
    #[must_use]
    pub fn is_suit(&self, suit: Suit) -> bool {
        self.suit == suit
    }

    /// Returns the full 40-card pack in suit-then-rank order.
    #[must_use]
    pub fn all() -> alloc::vec::Vec<Self> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| (1..=RANKS).map(move |rank| Self::new(suit, rank)))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "ace of {}", self.suit),
            8 => write!(f, "jack of {}", self.suit),
            9 => write!(f, "knight of {}", self.suit),
            10 => write!(f, "king of {}", self.suit),
            rank => write!(f, "{rank} of {}", self.suit),
        }
    }
}

const fn card_points(rank: u8) -> u8 {
    match rank {
        1 => 11,
        3 => 10,
        10 => 4,
        9 => 3,
        8 => 2,
        _ => 0,
    }
}

/// Number of ranks per suit.
pub const RANKS: u8 = 10;

/// Number of cards in the pack.
pub const DECK_SIZE: usize = 40;

/// Total points in the pack.
pub const TOTAL_POINTS: u32 = 120;
