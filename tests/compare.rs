//! Head-to-head comparison tests.

use fivecard::{Card, Deck, Hand, Tier, TopCards, Verdict, compare};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hand(cards: &str) -> Hand {
    cards.parse().unwrap()
}

fn card(card: &str) -> Card {
    card.parse().unwrap()
}

#[test]
fn royal_flush_beats_straight_flush() {
    let comparison = compare(&hand("A♠ K♠ Q♠ J♠ 10♠"), &hand("9♥ 8♥ 7♥ 6♥ 5♥"));

    assert_eq!(comparison.verdict, Verdict::Win);
    assert!(comparison.winner_is_player());
    assert_eq!(comparison.player_tier, Tier::RoyalFlush);
    assert_eq!(comparison.opponent_tier, Tier::StraightFlush);
    assert_eq!(comparison.top_cards, None);
    assert_eq!(
        comparison.message,
        "You win! You got: Royal Flush, and your opponent got: Straight Flush"
    );
}

#[test]
fn full_house_beats_flush() {
    let comparison = compare(&hand("2♥ 5♥ 9♥ J♥ K♥"), &hand("Q♠ Q♣ Q♦ 7♣ 7♦"));

    assert_eq!(comparison.verdict, Verdict::Lose);
    assert_eq!(comparison.player_tier, Tier::Flush);
    assert_eq!(comparison.opponent_tier, Tier::FullHouse);
    assert_eq!(
        comparison.message,
        "You lose! Your opponent got: Full house, but you got: Flush"
    );
}

#[test]
fn flushes_compare_suit_first() {
    let comparison = compare(&hand("A♣ 10♣ 6♣ 4♣ 2♣"), &hand("A♦ 10♦ 6♦ 4♦ 3♦"));

    assert_eq!(comparison.verdict, Verdict::Win);
    assert_eq!(comparison.player_tier, Tier::Flush);
    assert_eq!(comparison.opponent_tier, Tier::Flush);
    assert_eq!(
        comparison.top_cards,
        Some(TopCards {
            player: card("A♣"),
            opponent: card("A♦"),
        })
    );
    assert_eq!(
        comparison.message,
        "You win! Both got: Flush, and your top card (A♣) beats your opponent's top card (A♦)"
    );

    // A higher suit wins even with a lower top rank.
    let comparison = compare(&hand("K♠ 9♠ 7♠ 4♠ 2♠"), &hand("A♥ 10♥ 6♥ 4♥ 3♥"));
    assert_eq!(comparison.verdict, Verdict::Win);
}

#[test]
fn straight_flushes_compare_suit_first() {
    let comparison = compare(&hand("9♦ 8♦ 7♦ 6♦ 5♦"), &hand("6♠ 5♠ 4♠ 3♠ 2♠"));

    assert_eq!(comparison.player_tier, Tier::StraightFlush);
    assert_eq!(comparison.verdict, Verdict::Lose);
}

#[test]
fn pairs_compare_rank_first() {
    let comparison = compare(&hand("Q♣ Q♠ A♦ 3♥ 10♠"), &hand("K♣ K♠ 2♦ 3♥ 10♠"));

    assert_eq!(comparison.verdict, Verdict::Lose);
    assert_eq!(comparison.player_tier, Tier::OnePair);
    assert_eq!(
        comparison.message,
        "You lose! Both got: One pair, but your top card (Q♠) lost to your opponent's top card (K♠)"
    );
}

#[test]
fn equal_top_rank_falls_back_to_suit() {
    let comparison = compare(&hand("A♠ A♦ 5♣ 5♦ 9♠"), &hand("A♥ A♣ 4♠ 4♥ 9♦"));

    assert_eq!(comparison.player_tier, Tier::TwoPair);
    assert_eq!(comparison.verdict, Verdict::Win);
    assert_eq!(
        comparison.top_cards,
        Some(TopCards {
            player: card("A♠"),
            opponent: card("A♥"),
        })
    );
}

#[test]
fn low_straights_use_the_five_as_top_card() {
    let comparison = compare(&hand("A♠ 2♥ 3♣ 4♦ 5♠"), &hand("A♥ 2♣ 3♦ 4♠ 5♥"));
    assert_eq!(comparison.verdict, Verdict::Win);
    assert_eq!(
        comparison.top_cards,
        Some(TopCards {
            player: card("5♠"),
            opponent: card("5♥"),
        })
    );

    let comparison = compare(&hand("2♠ 3♥ 4♣ 5♦ 6♠"), &hand("A♥ 2♣ 3♦ 4♠ 5♥"));
    assert_eq!(comparison.verdict, Verdict::Win);
}

#[test]
fn identical_top_cards_reach_no_decision() {
    let same = hand("A♦ J♣ 8♥ 6♠ 3♣");
    let comparison = compare(&same, &same);

    assert_eq!(comparison.verdict, Verdict::NoDecision);
    assert!(!comparison.winner_is_player());
    assert_eq!(
        comparison.message,
        "No decision! Both got: High card, and both top cards (A♦) are identical"
    );
}

#[test]
fn verdict_flip() {
    assert_eq!(Verdict::Win.flip(), Verdict::Lose);
    assert_eq!(Verdict::Lose.flip(), Verdict::Win);
    assert_eq!(Verdict::NoDecision.flip(), Verdict::NoDecision);
}

#[test]
fn comparison_is_antisymmetric() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..2_000 {
        let mut deck = Deck::shuffled(&mut rng, 1);
        let player = deck.draw_hand().unwrap();
        let opponent = deck.draw_hand().unwrap();

        let forward = compare(&player, &opponent);
        let backward = compare(&opponent, &player);

        // Hands from one deck never share a card, so a winner always exists.
        assert_ne!(forward.verdict, Verdict::NoDecision, "{player} vs {opponent}");
        assert_eq!(forward.verdict, backward.verdict.flip());
        assert_eq!(forward.player_tier, backward.opponent_tier);
        assert_eq!(forward, compare(&player, &opponent));
    }
}
