//! CLI poker example: one five-card round against the computer.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use fivecard::{Card, Game, GameOptions, Hand, Suit};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("\nWelcome to Poker game!\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    prompt_line("\nPress Enter to draw your cards...");

    loop {
        match game.deal() {
            Ok(deal) => {
                println!("\nYour hand: {}", format_hand(&deal.player));
                println!("Computer's hand: {}", format_hand(&deal.opponent));

                match game.showdown() {
                    Ok(result) => println!("{}", result.comparison.message),
                    Err(err) => println!("\nError: {err}"),
                }
            }
            Err(err) => {
                println!("\nError: {err}");
                println!("Starting new round with fresh deck...\n");
                if let Err(err) = game.reshuffle() {
                    println!("Reshuffle error: {err}");
                }
            }
        }

        game.clear_round();

        if prompt_line("\nPlay again? (y/n): ") != "y" {
            println!("\nThanks for playing!\n");
            break;
        }

        println!("\n-------------------\n");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
