use tracing::info;

use crate::error::TrickError;
use crate::result::TrickOutcome;

use super::{Game, GameState};

impl Game {
    /// Resolves the full trick on the table.
    ///
    /// The winner collects the cards and leads the next trick. Each seat then
    /// draws one card in seat order while the deck lasts. Once the deck and
    /// every hand are empty the game ends. If the winner is a computer seat
    /// and the game goes on, it leads immediately along with any computer
    /// seats that follow it.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if no game is in
    /// progress or some seat has not played yet.
    ///
    /// Returns [`TrickError::Strategy`] if the computer lead fails. The trick
    /// has been resolved by then and its outcome travels with the error.
    pub fn end_trick(&mut self) -> Result<TrickOutcome, TrickError> {
        match self.state {
            GameState::Setup => return Err(TrickError::NotStarted),
            GameState::GameEnded => return Err(TrickError::GameEnded),
            GameState::TrickInProgress => return Err(TrickError::TrickIncomplete),
            GameState::TrickComplete => {}
        }

        let Some(winner) = self.trump.and_then(|trump| self.table.winner(trump.suit)) else {
            return Err(TrickError::TrickIncomplete);
        };

        let cards = self.table.clear();
        self.players[winner].collect(cards.iter().map(|&(_, card)| card));
        self.current_turn = winner;

        self.refill_hands();

        let game_over = self.deck.is_empty() && self.players.iter().all(|p| p.is_empty());
        let outcome = TrickOutcome {
            winner,
            cards,
            game_over,
        };

        info!(
            winner,
            points = outcome.points(),
            deck = self.deck.len(),
            game_over,
            "trick resolved"
        );

        if game_over {
            self.state = GameState::GameEnded;
            info!("game ended");
            return Ok(outcome);
        }

        self.state = GameState::TrickInProgress;

        if self.players[winner].is_computer() {
            let result = self.play_computer_seats();
            self.sync_trick_state();
            if let Err(error) = result {
                return Err(TrickError::Strategy { error, outcome });
            }
        }

        Ok(outcome)
    }

    fn refill_hands(&mut self) {
        let hand_size = self.options.hand_size;

        for player in &mut self.players {
            let Some(card) = self.deck.draw() else {
                break;
            };
            debug_assert_eq!(
                player.len(),
                hand_size - 1,
                "seat {} refilled with an unexpected hand size",
                player.seat()
            );
            player.add_card(card);
        }
    }
}
