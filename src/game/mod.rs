//! Game engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::{GameMode, GameOptions};
use crate::player::{ControlMode, Player};
use crate::strategy::{RandomStrategy, Strategy};
use crate::trick::Trick;

mod play;
mod resolve;
pub mod state;

pub use state::GameState;

/// A Briscola game engine that manages the deck, hands, tricks and turn order.
///
/// The game owns the deck, every player's hand and won pile, and the trick
/// in progress. Computer-controlled seats are played through a
/// [`Strategy`]; human seats are played by the caller with
/// [`Game::play_card`].
pub struct Game {
    /// Table configuration.
    options: GameOptions,
    /// Game mode recorded at initialization.
    mode: GameMode,
    /// Current lifecycle state.
    state: GameState,
    /// Players in seat order.
    players: Vec<Player>,
    /// Seat whose turn it is.
    current_turn: usize,
    /// The trump card, fixed for the whole game once dealt.
    trump: Option<Card>,
    /// Draw pile.
    deck: Deck,
    /// Cards on the table.
    table: Trick,
    /// Card choice for computer seats.
    strategy: Box<dyn Strategy + Send>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Computer seats play with a [`RandomStrategy`] derived from the same
    /// seed until [`Game::with_strategy`] replaces it.
    ///
    /// # Example
    ///
    /// ```
    /// use briscola::{ControlMode, Game, GameMode, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.initialize(GameMode::Singleplayer, 2, &[ControlMode::Human, ControlMode::Computer])
    ///     .unwrap();
    /// assert_eq!(game.cards_remaining(), 34);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self {
            options,
            mode: GameMode::default(),
            state: GameState::Setup,
            players: Vec::new(),
            current_turn: options.starter_seat,
            trump: None,
            deck: Deck::default(),
            table: Trick::new(options.seats),
            strategy: Box::new(RandomStrategy::new(seed.rotate_left(32))),
            rng,
        }
    }

    /// Replaces the strategy used for computer-controlled seats.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Strategy + Send + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Shuffles a fresh deck and deals a new game.
    ///
    /// Calling this on a game already in progress discards it and starts over.
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe an unsupported table, or if
    /// `number_of_players` or `seat_modes` do not match the configured seats.
    pub fn initialize(
        &mut self,
        mode: GameMode,
        number_of_players: usize,
        seat_modes: &[ControlMode],
    ) -> Result<(), SetupError> {
        self.validate(number_of_players, seat_modes)?;
        let deck = Deck::shuffled(&mut self.rng);
        self.deal(mode, seat_modes, deck);
        Ok(())
    }

    /// Deals a new game from a deck in a caller-chosen order.
    ///
    /// The last card of `deck` becomes the trump card and stays in the deck.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::initialize`], and
    /// [`SetupError::IncompleteDeck`] if `deck` is not the full pack.
    pub fn initialize_with_deck(
        &mut self,
        mode: GameMode,
        number_of_players: usize,
        seat_modes: &[ControlMode],
        deck: Deck,
    ) -> Result<(), SetupError> {
        self.validate(number_of_players, seat_modes)?;
        if !deck.is_complete() {
            return Err(SetupError::IncompleteDeck);
        }
        self.deal(mode, seat_modes, deck);
        Ok(())
    }

    fn validate(
        &self,
        number_of_players: usize,
        seat_modes: &[ControlMode],
    ) -> Result<(), SetupError> {
        let GameOptions {
            seats,
            hand_size,
            starter_seat,
        } = self.options;

        if !matches!(seats, 2 | 4) {
            return Err(SetupError::UnsupportedSeats(seats));
        }
        if number_of_players != seats {
            return Err(SetupError::PlayerCountMismatch {
                expected: seats,
                found: number_of_players,
            });
        }
        if seat_modes.len() != seats {
            return Err(SetupError::ControlModeMismatch {
                expected: seats,
                found: seat_modes.len(),
            });
        }
        if starter_seat >= seats {
            return Err(SetupError::InvalidStarterSeat(starter_seat));
        }
        if hand_size == 0 || hand_size > DECK_SIZE / seats {
            return Err(SetupError::InvalidHandSize(hand_size));
        }
        Ok(())
    }

    fn deal(&mut self, mode: GameMode, seat_modes: &[ControlMode], mut deck: Deck) {
        self.trump = deck.last().copied();

        let hand_size = self.options.hand_size;
        self.players = seat_modes
            .iter()
            .enumerate()
            .map(|(seat, &control)| {
                let hand = (0..hand_size).filter_map(|_| deck.draw()).collect();
                Player::new(seat, control, hand)
            })
            .collect();

        self.mode = mode;
        self.deck = deck;
        self.table = Trick::new(self.options.seats);
        self.current_turn = self.options.starter_seat;
        self.state = GameState::TrickInProgress;

        info!(
            ?mode,
            seats = self.players.len(),
            trump = ?self.trump,
            starter = self.current_turn,
            "game initialized"
        );
    }

    /// Returns the table options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the game mode.
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game has ended.
    pub fn is_ended(&self) -> bool {
        self.state == GameState::GameEnded
    }

    /// Returns the seat whose turn it is.
    pub const fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Returns the player whose turn it is, if a game is in progress.
    pub fn current_player(&self) -> Option<&Player> {
        if self.state.is_in_progress() {
            self.players.get(self.current_turn)
        } else {
            None
        }
    }

    /// Returns the trump card, or `None` before the game is initialized.
    pub const fn trump_card(&self) -> Option<Card> {
        self.trump
    }

    /// Returns the trump suit, or `None` before the game is initialized.
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_card().map(|c| c.suit)
    }

    /// Returns all players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `seat`.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns a copy of every seat's hand, indexed by seat.
    pub fn hands(&self) -> Vec<Vec<Card>> {
        self.players.iter().map(|p| p.hand().to_vec()).collect()
    }

    /// Returns the cards on the table.
    pub const fn table(&self) -> &Trick {
        &self.table
    }

    /// Returns whether every seat has played into the current trick.
    pub fn is_trick_full(&self) -> bool {
        self.table.is_full()
    }

    /// Returns the draw pile.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
