//! Round controller integration tests.

use std::collections::HashSet;

use hitstand::{
    ActionError, Card, DECK_SIZE, DealError, Deck, ExhaustionPolicy, Face, Game, GameOptions,
    GameState, Outcome, ShowdownError, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Deals `ranks` in order: player, player, dealer hole, dealer up, then hits.
fn stacked_game(options: GameOptions, ranks: &[u8]) -> Game {
    let suits = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
    let draws: Vec<Card> = ranks
        .iter()
        .enumerate()
        .map(|(index, &rank)| card(suits[index % 4], rank))
        .collect();
    Game::with_deck(options, Deck::stacked(&draws)).unwrap()
}

fn assert_distinct(cards: &[Card]) {
    let unique: HashSet<(Suit, u8)> = cards.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), cards.len());
}

#[test]
fn new_game_deals_two_cards_each() {
    let game = Game::new(GameOptions::default(), 42).unwrap();

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.player_cards().len(), 2);
    assert_eq!(game.dealer_cards().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);

    assert!(game.player_cards().iter().all(Card::is_face_up));
    assert_eq!(game.dealer_cards()[0].face, Face::Down);
    assert_eq!(game.dealer_cards()[1].face, Face::Up);
    assert!(game.dealer_hand().is_hidden());
    assert_eq!(game.dealer_points(), None);
}

#[test]
fn same_seed_deals_same_round() {
    let a = Game::new(GameOptions::default(), 7).unwrap();
    let b = Game::new(GameOptions::default(), 7).unwrap();
    assert_eq!(a.player_cards(), b.player_cards());
    assert_eq!(a.dealer_cards(), b.dealer_cards());
}

#[test]
fn deck_holds_52_distinct_cards_and_shuffle_restores_them() {
    let mut deck = Deck::new(3);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut dealt = Vec::new();
    while let Some(card) = deck.deal() {
        dealt.push(card);
    }
    assert_eq!(dealt.len(), DECK_SIZE);
    assert_distinct(&dealt);
    assert!(deck.is_empty());

    deck.shuffle();
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn refill_skips_cards_in_play() {
    let held = [card(Suit::Hearts, 1), card(Suit::Spades, 13)];
    let mut deck = Deck::stacked(&[]);
    deck.refill_excluding(&held);

    assert_eq!(deck.len(), DECK_SIZE - 2);
    while let Some(card) = deck.deal() {
        assert!(!held.iter().any(|h| h.same_card(&card)));
    }
}

#[test]
fn repeated_queries_are_stable() {
    let game = Game::new(GameOptions::default(), 11).unwrap();
    assert_eq!(game.player_points(), game.player_points());
    assert_eq!(game.player_cards(), game.player_cards());
    assert_eq!(game.dealer_cards(), game.dealer_cards());
}

#[test]
fn hit_returns_face_up_card_and_points() {
    let mut game = stacked_game(GameOptions::default(), &[2, 3, 10, 9, 4]);

    let (card, points) = game.hit_player().unwrap();
    assert_eq!(card.rank, 4);
    assert!(card.is_face_up());
    assert_eq!(points, 9);
    assert_eq!(game.player_cards().len(), 3);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn player_20_beats_dealer_19() {
    let mut game = stacked_game(GameOptions::default(), &[10, 10, 10, 9]);

    let outcome = game.hit_dealer().unwrap();
    assert_eq!(outcome, Outcome::PlayerWins);
    assert!(outcome.player_won());
    assert_eq!(game.state(), GameState::Resolved);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
    assert_eq!(game.dealer_points(), Some(19));
    assert!(game.dealer_cards().iter().all(Card::is_face_up));
}

#[test]
fn player_blackjack_beats_three_card_21() {
    let mut game = stacked_game(GameOptions::default(), &[1, 13, 10, 6, 5]);

    assert!(game.player_hand().has_blackjack());
    let outcome = game.hit_dealer().unwrap();
    assert_eq!(outcome, Outcome::PlayerBlackjack);
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.dealer_points(), Some(21));
}

#[test]
fn dealer_blackjack_beats_three_card_21() {
    let mut game = stacked_game(GameOptions::default(), &[7, 4, 1, 13, 10]);

    let (_, points) = game.hit_player().unwrap();
    assert_eq!(points, 21);

    // Reaching 21 resolves the round without a pass.
    assert_eq!(game.state(), GameState::Resolved);
    assert_eq!(game.outcome(), Some(Outcome::DealerBlackjack));
    assert!(!Outcome::DealerBlackjack.player_won());
}

#[test]
fn equal_points_without_naturals_is_a_push() {
    let mut game = stacked_game(GameOptions::default(), &[10, 8, 9, 9]);
    let outcome = game.hit_dealer().unwrap();
    assert_eq!(outcome, Outcome::Push);
    assert!(outcome.is_push());
}

#[test]
fn both_naturals_is_a_push() {
    let mut game = stacked_game(GameOptions::default(), &[1, 13, 1, 12]);
    assert_eq!(game.hit_dealer().unwrap(), Outcome::Push);
}

#[test]
fn dealer_with_more_points_wins() {
    let mut game = stacked_game(GameOptions::default(), &[10, 7, 10, 9]);
    assert_eq!(game.hit_dealer().unwrap(), Outcome::DealerWins);
}

#[test]
fn dealer_bust_pays_player() {
    let mut game = stacked_game(GameOptions::default(), &[10, 8, 10, 6, 10]);
    assert_eq!(game.hit_dealer().unwrap(), Outcome::DealerBust);
    assert_eq!(game.dealer_points(), Some(26));
}

#[test]
fn player_bust_loses_without_dealer_drawing() {
    let mut game = stacked_game(GameOptions::default(), &[10, 6, 10, 2, 10, 5]);

    let (_, points) = game.hit_player().unwrap();
    assert_eq!(points, 26);
    assert_eq!(game.outcome(), Some(Outcome::PlayerBust));
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(!game.dealer_hand().is_hidden());
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn manual_mode_waits_for_pass_after_bust() {
    let options = GameOptions::default().with_auto_resolve(false);
    let mut game = stacked_game(options, &[10, 6, 10, 2, 10, 5]);

    game.hit_player().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.outcome(), None);

    assert_eq!(game.hit_dealer().unwrap(), Outcome::PlayerBust);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn actions_after_resolution_are_rejected() {
    let mut game = stacked_game(GameOptions::default(), &[10, 10, 10, 9, 5]);
    game.hit_dealer().unwrap();

    assert_eq!(game.hit_player().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.hit_dealer().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.player_cards().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn new_round_resets_everything() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    game.hit_dealer().unwrap();
    assert_eq!(game.state(), GameState::Resolved);

    game.new_round().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.player_cards().len(), 2);
    assert_eq!(game.dealer_cards().len(), 2);
    assert_eq!(game.dealer_cards()[0].face, Face::Down);
    assert!(game.dealer_hand().is_hidden());
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn short_deck_fails_opening_deal() {
    let draws = [card(Suit::Hearts, 9), card(Suit::Clubs, 5), card(Suit::Diamonds, 7)];
    let err = Game::with_deck(GameOptions::default(), Deck::stacked(&draws)).unwrap_err();
    assert_eq!(err, DealError::NotEnoughCards);
}

#[test]
fn empty_deck_fails_hit_by_default() {
    let mut game = stacked_game(GameOptions::default(), &[10, 2, 10, 3]);
    assert_eq!(game.hit_player().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn dealer_out_of_cards_stays_in_dealer_turn() {
    let mut game = stacked_game(GameOptions::default(), &[10, 9, 10, 2]);

    assert_eq!(game.hit_dealer().unwrap_err(), ShowdownError::NoCards);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(!game.dealer_hand().is_hidden());
    assert_eq!(game.outcome(), None);

    // Retrying resumes without a second reveal.
    assert_eq!(game.hit_dealer().unwrap_err(), ShowdownError::NoCards);
    assert_eq!(game.hit_player().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn reshuffle_policy_refills_from_unused_cards() {
    let options = GameOptions::default()
        .with_exhaustion(ExhaustionPolicy::Reshuffle)
        .with_auto_resolve(false);
    let mut game = stacked_game(options, &[10, 2, 10, 3]);

    let (card, _) = game.hit_player().unwrap();
    assert!(card.is_face_up());
    assert_eq!(game.player_cards().len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5);

    let mut held = game.player_cards().to_vec();
    held.extend_from_slice(game.dealer_cards());
    assert_distinct(&held);
}

#[test]
fn reshuffle_policy_covers_opening_deal_and_dealer_draws() {
    let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Reshuffle);
    let draws = [card(Suit::Hearts, 10), card(Suit::Clubs, 9), card(Suit::Spades, 10)];
    let mut game = Game::with_deck(options, Deck::stacked(&draws)).unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);

    let outcome = game.hit_dealer().unwrap();
    assert_eq!(game.outcome(), Some(outcome));
    assert!(game.dealer_hand().points() >= 17);

    let mut held = game.player_cards().to_vec();
    held.extend_from_slice(game.dealer_cards());
    assert_distinct(&held);
}

#[test]
fn outcome_messages() {
    assert_eq!(Outcome::PlayerBust.to_string(), "You bust and lose!");
    assert_eq!(Outcome::DealerBust.to_string(), "Dealer busts, you win!");
    assert_eq!(Outcome::DealerWins.to_string(), "Dealer wins :(");
    assert_eq!(Outcome::PlayerWins.to_string(), "Congrats! You win!");
    assert_eq!(Outcome::PlayerBlackjack.to_string(), "Blackjack! You Win!");
    assert_eq!(
        Outcome::DealerBlackjack.to_string(),
        "Dealer Blackjack! You lose!"
    );
    assert_eq!(Outcome::Push.to_string(), "There is a tie");
}

#[test]
fn hit_keeps_its_card_when_dealer_runs_dry() {
    let mut game = stacked_game(GameOptions::default(), &[10, 5, 10, 2, 6]);

    let (card, points) = game.hit_player().unwrap();
    assert_eq!(card.rank, 6);
    assert_eq!(points, 21);
    assert_eq!(game.player_cards().len(), 3);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.outcome(), None);

    assert_eq!(game.hit_dealer().unwrap_err(), ShowdownError::NoCards);
}

#[test]
fn hidden_dealer_card_does_not_show_its_identity() {
    let mut game = stacked_game(GameOptions::default(), &[10, 8, 1, 9]);

    assert_eq!(game.dealer_cards()[0].to_string(), "a face-down card");
    assert_eq!(game.dealer_hand().to_string(), "a face-down card");

    game.hit_dealer().unwrap();
    assert_eq!(game.dealer_cards()[0].to_string(), "Ace of Clubs");
}

#[test]
fn game_keeps_its_options() {
    let options = GameOptions::default()
        .with_auto_resolve(false)
        .with_exhaustion(ExhaustionPolicy::Reshuffle);
    let game = Game::new(options, 9).unwrap();
    assert_eq!(game.options(), &options);
    assert!(!game.options().auto_resolve);
}
