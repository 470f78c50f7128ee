//! Terminal blackjack front-end.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use hitstand::{Card, DealerHand, ExhaustionPolicy, Game, GameOptions, Hand, Suit};

/// Play blackjack against the dealer.
#[derive(Debug, Parser)]
#[command(name = "hitstand", version)]
struct Args {
    /// Seed for the first shuffle. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Refill the deck from unused cards instead of failing when it runs out.
    #[arg(long)]
    reshuffle: bool,
    /// Do not resolve automatically when reaching 21; wait for a pass.
    #[arg(long)]
    manual: bool,
    /// Log engine debug records to stderr. `RUST_LOG` overrides this.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let exhaustion = if args.reshuffle {
        ExhaustionPolicy::Reshuffle
    } else {
        ExhaustionPolicy::Error
    };
    let options = GameOptions::default()
        .with_auto_resolve(!args.manual)
        .with_exhaustion(exhaustion);

    println!("Blackjack (type 'q' to quit)");

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    loop {
        while game.outcome().is_none() {
            print_table(&game);

            match prompt_line("[h]it [p]ass [q]uit: ").as_str() {
                "h" | "hit" => match game.hit_player() {
                    Ok((card, points)) => {
                        println!("You drew {}. ({points} points)", format_card(&card));
                    }
                    Err(err) => {
                        println!("Hit error: {err}");
                        return;
                    }
                },
                "p" | "pass" | "s" | "stand" => {
                    if let Err(err) = game.hit_dealer() {
                        println!("Dealer error: {err}");
                        return;
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&game);
        if let Some(outcome) = game.outcome() {
            println!("{outcome}");
        }

        match prompt_line("New game? (y/n): ").as_str() {
            "y" | "yes" | "" => {
                if let Err(err) = game.new_round() {
                    println!("Deal error: {err}");
                    return;
                }
            }
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // EOF quits like 'q'.
    if matches!(io::stdin().read_line(&mut input), Ok(0) | Err(_)) {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    let dealer = game.dealer_hand();
    match game.dealer_points() {
        Some(points) => println!("Dealer: {} (value {points})", format_dealer(dealer)),
        None => println!("Dealer: {}", format_dealer(dealer)),
    }

    let player = game.player_hand();
    println!(
        "You:    {} (value {})",
        format_hand(player),
        player.points()
    );
    println!();
}

fn format_dealer(dealer: &DealerHand) -> String {
    dealer
        .cards()
        .iter()
        .map(|card| {
            if card.is_face_up() {
                format_card(card)
            } else {
                "??".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        rank => rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
