use tracing::{debug, error, warn};

use crate::card::Card;
use crate::error::{PlayError, StrategyError};
use crate::strategy::PlayView;

use super::{Game, GameState};

impl Game {
    fn ensure_turn(&self, seat: usize) -> Result<(), PlayError> {
        match self.state {
            GameState::Setup => return Err(PlayError::NotStarted),
            GameState::GameEnded => return Err(PlayError::GameEnded),
            GameState::TrickInProgress | GameState::TrickComplete => {}
        }

        if seat != self.current_turn {
            return Err(PlayError::NotYourTurn);
        }

        if self.table.is_full() {
            return Err(PlayError::TrickComplete);
        }

        Ok(())
    }

    fn advance_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.players.len();
    }

    pub(super) fn sync_trick_state(&mut self) {
        if self.table.is_full() {
            self.state = GameState::TrickComplete;
        }
    }

    /// Plays a card for `seat`.
    ///
    /// A human seat must name a card from its hand. For a computer seat the
    /// card is chosen by the strategy and `card` is ignored. After the play,
    /// every following computer seat that has not yet played in this trick
    /// plays in turn, stopping at the first human seat still to play or when
    /// the trick is full.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if no game is in
    /// progress, it is not `seat`'s turn, the trick is already full, or a
    /// human seat names no card or a card it does not hold.
    ///
    /// Returns [`PlayError::Strategy`] if the strategy answers with an index
    /// outside the acting seat's hand. Plays recorded earlier in the same
    /// call are kept; the misbehaving seat's card is not moved.
    pub fn play_card(&mut self, seat: usize, card: Option<Card>) -> Result<(), PlayError> {
        if let Err(err) = self.ensure_turn(seat) {
            warn!(seat, current = self.current_turn, %err, "play rejected");
            return Err(err);
        }

        if self.players[seat].is_computer() {
            if card.is_some() {
                debug!(seat, "ignoring card supplied for a computer seat");
            }
        } else {
            let card = card.ok_or(PlayError::MissingCard)?;
            let Some(card) = self.players[seat].take_card(&card) else {
                warn!(seat, %card, "card not in hand");
                return Err(PlayError::CardNotInHand);
            };
            self.place(seat, card);
        }

        let result = self.play_computer_seats();
        self.sync_trick_state();
        result.map_err(PlayError::from)
    }

    /// Plays every consecutive computer seat that still owes a card.
    pub(super) fn play_computer_seats(&mut self) -> Result<(), StrategyError> {
        let Some(trump) = self.trump else {
            return Ok(());
        };
        while !self.table.is_full()
            && self.players[self.current_turn].is_computer()
            && !self.table.has_played(self.current_turn)
        {
            self.play_computer(self.current_turn, trump)?;
        }
        Ok(())
    }

    fn play_computer(&mut self, seat: usize, trump: Card) -> Result<(), StrategyError> {
        let hands = self.hands();
        let view = PlayView {
            seat,
            hands: &hands,
            table: &self.table,
            trump,
        };
        let index = self.strategy.choose_card(&view);

        let Some(card) = self.players[seat].take_at(index) else {
            let err = StrategyError {
                seat,
                index,
                hand_len: hands[seat].len(),
            };
            error!(%err, "strategy returned an invalid card index");
            return Err(err);
        };

        self.place(seat, card);
        Ok(())
    }

    fn place(&mut self, seat: usize, card: Card) {
        debug!(seat, %card, control = ?self.players[seat].control(), "card played");
        self.table.place(seat, card);
        self.advance_turn();
    }
}
