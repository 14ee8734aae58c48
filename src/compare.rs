//! Head-to-head hand comparison.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;

use log::debug;

use crate::hand::{Hand, Tier};
use crate::result::{Comparison, TopCards, Verdict};

/// Compares the player's hand against the opponent's.
///
/// The higher tier wins outright. Equal tiers are settled by the top card
/// of each ranked hand: rank first and then suit, except for flushes and
/// straight flushes where suit is compared first. Identical top cards
/// give [`Verdict::NoDecision`].
///
/// # Example
///
/// ```
/// use fivecard::{Hand, Verdict, compare};
///
/// let player: Hand = "A♠ K♠ Q♠ J♠ 10♠".parse().unwrap();
/// let opponent: Hand = "9♥ 8♥ 7♥ 6♥ 5♥".parse().unwrap();
///
/// let comparison = compare(&player, &opponent);
/// assert_eq!(comparison.verdict, Verdict::Win);
/// ```
#[must_use]
pub fn compare(player: &Hand, opponent: &Hand) -> Comparison {
    let player_tier = player.tier();
    let opponent_tier = opponent.tier();

    if player_tier != opponent_tier {
        let (verdict, message) = if player_tier > opponent_tier {
            (
                Verdict::Win,
                format!("You win! You got: {player_tier}, and your opponent got: {opponent_tier}"),
            )
        } else {
            (
                Verdict::Lose,
                format!("You lose! Your opponent got: {opponent_tier}, but you got: {player_tier}"),
            )
        };
        debug!("{player_tier} vs {opponent_tier}: {verdict:?} on tier");

        return Comparison {
            verdict,
            player_tier,
            opponent_tier,
            top_cards: None,
            message,
        };
    }

    let top_cards = TopCards {
        player: player.top_card(),
        opponent: opponent.top_card(),
    };
    let low_ace = player.is_low_straight() && opponent.is_low_straight();

    let verdict = match compare_top_cards(player_tier, top_cards, low_ace) {
        Ordering::Greater => Verdict::Win,
        Ordering::Less => Verdict::Lose,
        Ordering::Equal => Verdict::NoDecision,
    };
    debug!(
        "both {player_tier}, top cards {} vs {}: {verdict:?}",
        top_cards.player, top_cards.opponent
    );

    Comparison {
        verdict,
        player_tier,
        opponent_tier,
        top_cards: Some(top_cards),
        message: top_card_message(verdict, player_tier, top_cards),
    }
}

fn compare_top_cards(tier: Tier, top_cards: TopCards, low_ace: bool) -> Ordering {
    let TopCards { player, opponent } = top_cards;
    let by_rank = player.rank.value(low_ace).cmp(&opponent.rank.value(low_ace));
    let by_suit = player.suit.value().cmp(&opponent.suit.value());

    if tier.breaks_ties_by_suit() {
        by_suit.then(by_rank)
    } else {
        by_rank.then(by_suit)
    }
}

fn top_card_message(verdict: Verdict, tier: Tier, top_cards: TopCards) -> String {
    let TopCards { player, opponent } = top_cards;
    match verdict {
        Verdict::Win => format!(
            "You win! Both got: {tier}, and your top card ({player}) beats your opponent's top card ({opponent})"
        ),
        Verdict::Lose => format!(
            "You lose! Both got: {tier}, but your top card ({player}) lost to your opponent's top card ({opponent})"
        ),
        Verdict::NoDecision => {
            format!("No decision! Both got: {tier}, and both top cards ({player}) are identical")
        }
    }
}
