//! Deck and game integration tests.

use std::collections::HashSet;

use fivecard::{
    CARDS_PER_ROUND, Card, DECK_SIZE, DealError, Deck, Game, GameOptions, GameState, Hand,
    ReshuffleError, ShowdownError, Tier, Verdict,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn cards(cards: &str) -> Vec<Card> {
    cards
        .split_whitespace()
        .map(|card| card.parse().unwrap())
        .collect()
}

fn set_deck(game: &Game, draws: &str) {
    game.deck.replace(Deck::from_cards(cards(draws)));
}

#[test]
fn new_deck_holds_52_distinct_cards() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_seeded_and_keeps_every_card() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3), 2);
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3), 2);
    assert_eq!(first, second);
    assert_ne!(first, Deck::new());

    let shuffled: HashSet<Card> = first.cards().iter().copied().collect();
    let ordered: HashSet<Card> = Deck::new().cards().iter().copied().collect();
    assert_eq!(shuffled, ordered);
}

#[test]
fn draw_takes_cards_from_the_top() {
    let mut deck = Deck::from_cards(cards("A♠ K♠ Q♠ J♠ 10♠ 9♠"));

    assert_eq!(deck.draw(2), Some(cards("A♠ K♠")));
    assert_eq!(deck.len(), 4);

    assert_eq!(deck.draw(5), None);
    assert_eq!(deck.len(), 4);

    assert_eq!(deck.draw_hand(), None);
    assert_eq!(deck.draw(4), Some(cards("Q♠ J♠ 10♠ 9♠")));
    assert!(deck.is_empty());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_shuffle_passes(5)
        .with_fresh_deck_each_round(false);

    assert_eq!(options.shuffle_passes, 5);
    assert!(!options.fresh_deck_each_round);

    let defaults = GameOptions::default();
    assert_eq!(defaults.shuffle_passes, 2);
    assert!(defaults.fresh_deck_each_round);
}

#[test]
fn basic_round_flow() {
    let game = Game::new(GameOptions::default(), 42);
    assert_eq!(game.state(), GameState::WaitingForDeal);

    set_deck(
        &game,
        "A♠ K♠ Q♠ J♠ 10♠ \
         9♥ 8♥ 7♥ 6♥ 5♥ \
         2♣",
    );

    let deal = game.deal().unwrap();
    assert_eq!(deal.player, "A♠ K♠ Q♠ J♠ 10♠".parse::<Hand>().unwrap());
    assert_eq!(deal.opponent, "9♥ 8♥ 7♥ 6♥ 5♥".parse::<Hand>().unwrap());
    assert_eq!(game.state(), GameState::Dealt);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.player_hand(), Some(deal.player));
    assert_eq!(game.opponent_hand(), Some(deal.opponent));

    let result = game.showdown().unwrap();
    assert_eq!(result.player, deal.player);
    assert_eq!(result.comparison.verdict, Verdict::Win);
    assert_eq!(result.comparison.player_tier, Tier::RoyalFlush);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.rounds_played(), 1);

    game.clear_round();
    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.player_hand(), None);
    assert_eq!(game.opponent_hand(), None);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn deal_and_showdown_reject_wrong_state() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::InvalidState);

    game.showdown().unwrap();
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn deal_with_short_deck_returns_error() {
    let game = Game::new(GameOptions::default(), 5);
    set_deck(&game, "A♠ K♠ Q♠ J♠ 10♠ 9♥ 8♥ 7♥ 6♥");

    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.cards_remaining(), 9);
    assert_eq!(game.state(), GameState::WaitingForDeal);
}

#[test]
fn shared_deck_runs_down_and_reshuffles() {
    let options = GameOptions::default().with_fresh_deck_each_round(false);
    let game = Game::new(options, 9);
    let mut seen = HashSet::new();

    for _ in 0..DECK_SIZE / CARDS_PER_ROUND {
        assert!(!game.needs_reshuffle());
        let deal = game.deal().unwrap();
        seen.extend(deal.player.cards().iter().copied());
        seen.extend(deal.opponent.cards().iter().copied());
        game.showdown().unwrap();
        game.clear_round();
    }

    // Every card dealt from the shared deck is distinct.
    assert_eq!(seen.len(), 50);
    assert_eq!(game.cards_remaining(), 2);
    assert!(game.needs_reshuffle());
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);

    assert_eq!(game.check_and_reshuffle(), Ok(true));
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.check_and_reshuffle(), Ok(false));
    assert_eq!(game.rounds_played(), 5);
}

#[test]
fn same_seed_deals_same_hands() {
    let first = Game::new(GameOptions::default(), 1234);
    let second = Game::new(GameOptions::default(), 1234);

    for _ in 0..3 {
        assert_eq!(first.deal().unwrap(), second.deal().unwrap());
        assert_eq!(first.showdown().unwrap(), second.showdown().unwrap());
        first.clear_round();
        second.clear_round();
    }
}

#[test]
fn dealt_rounds_always_have_a_winner() {
    let game = Game::new(GameOptions::default().with_shuffle_passes(1), 77);

    for _ in 0..200 {
        game.deal().unwrap();
        let result = game.showdown().unwrap();
        assert_ne!(result.comparison.verdict, Verdict::NoDecision);
        game.clear_round();
    }

    assert_eq!(game.rounds_played(), 200);
}
