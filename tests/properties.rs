//! Property tests for game flow and trick resolution.
//!
//! Properties tested:
//! - Every card is accounted for exactly once after every operation
//! - Plays from a seat that does not hold the turn change nothing
//! - The game ends exactly once, after the final trick
//! - A trump always beats a non-trump lead

mod common;

use briscola::{
    Card, ControlMode, DECK_SIZE, Deck, Game, GameMode, GameOptions, GameState, PlayError,
    RandomStrategy, Suit, Trick,
};
use proptest::prelude::*;

use common::{assert_conserved, rigged_deck};

fn seat_modes() -> impl Strategy<Value = Vec<ControlMode>> {
    prop_oneof![Just(2_usize), Just(4_usize)].prop_flat_map(|seats| {
        prop::collection::vec(
            prop_oneof![Just(ControlMode::Human), Just(ControlMode::Computer)],
            seats,
        )
    })
}

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

type Snapshot = (GameState, usize, Vec<Vec<Card>>, Trick, Deck, Vec<Vec<Card>>);

fn snapshot(game: &Game) -> Snapshot {
    (
        game.state(),
        game.current_turn(),
        game.hands(),
        game.table().clone(),
        game.deck().clone(),
        game.players()
            .iter()
            .map(|p| p.won_cards().to_vec())
            .collect(),
    )
}

/// Plays one step: resolves a full trick or plays for the seat holding the turn.
fn step(game: &mut Game, choice: usize) -> bool {
    if game.state() == GameState::TrickComplete {
        return game.end_trick().expect("full trick resolves").game_over;
    }

    let seat = game.current_turn();
    let player = &game.players()[seat];
    let card = if player.is_computer() {
        None
    } else {
        Some(player.hand()[choice % player.len()])
    };
    game.play_card(seat, card).expect("seat holding the turn can play");
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cards_conserved_and_game_ends_once(
        modes in seat_modes(),
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 64),
    ) {
        let seats = modes.len();
        let options = GameOptions::default().with_seats(seats);
        let mut game = Game::new(options, seed).with_strategy(RandomStrategy::new(seed ^ 0xB15C));
        game.initialize(GameMode::Multiplayer, seats, &modes).unwrap();
        assert_conserved(&game);

        let mut endings = 0;
        let mut tricks = 0;
        let mut steps = 0;
        while !game.is_ended() {
            let resolving = game.state() == GameState::TrickComplete;
            if step(&mut game, choices[steps % choices.len()]) {
                endings += 1;
            }
            if resolving {
                tricks += 1;
                prop_assert!(game.is_ended() || tricks < DECK_SIZE / seats);
            }
            assert_conserved(&game);
            steps += 1;
            prop_assert!(steps <= 2 * DECK_SIZE, "game did not terminate");
        }

        prop_assert_eq!(endings, 1);
        prop_assert_eq!(tricks, DECK_SIZE / seats);
        prop_assert_eq!(game.cards_remaining(), 0);
        prop_assert!(game.players().iter().all(|p| p.is_empty()));
    }

    #[test]
    fn prop_off_turn_play_changes_nothing(
        modes in seat_modes(),
        seed in any::<u64>(),
        warmup in 0_usize..30,
        offset in 1_usize..4,
        choice in any::<usize>(),
    ) {
        let seats = modes.len();
        let mut game = Game::new(GameOptions::default().with_seats(seats), seed);
        game.initialize(GameMode::Multiplayer, seats, &modes).unwrap();

        for i in 0..warmup {
            if game.is_ended() {
                break;
            }
            step(&mut game, choice.wrapping_add(i));
        }

        let before = snapshot(&game);
        let intruder = (game.current_turn() + 1 + offset % (seats - 1)) % seats;

        let card = game.players()[intruder].hand().first().copied();
        let result = game.play_card(intruder, card);
        if game.is_ended() {
            prop_assert_eq!(result, Err(PlayError::GameEnded));
        } else {
            prop_assert_eq!(result, Err(PlayError::NotYourTurn));
        }
        prop_assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn prop_trump_beats_non_trump_lead(
        trump in suit(),
        lead_rank in 1_u8..=10,
        trump_rank in 1_u8..=10,
        lead_suit in suit(),
    ) {
        prop_assume!(lead_suit != trump);

        let lead = Card::new(lead_suit, lead_rank);
        let ruff = Card::new(trump, trump_rank);
        let trump_card = Card::new(trump, if trump_rank == 10 { 9 } else { 10 });
        let deck = rigged_deck(&[lead, ruff], trump_card);

        let options = GameOptions::default().with_hand_size(1);
        let mut game = Game::new(options, 0);
        game.initialize_with_deck(
            GameMode::Multiplayer,
            2,
            &[ControlMode::Human, ControlMode::Human],
            deck,
        )
        .unwrap();

        game.play_card(0, Some(lead)).unwrap();
        game.play_card(1, Some(ruff)).unwrap();
        let outcome = game.end_trick().unwrap();
        prop_assert_eq!(outcome.winner, 1);
    }
}
