//! CLI Snap example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use snaprs::{
    Card, EmptyHandPolicy, GameOptions, GameState, LogObserver, RemainderPolicy, RemovalPolicy,
    SnapGame, Suit, TableView,
};

/// Play Snap in the terminal.
#[derive(Debug, Parser)]
struct Args {
    /// Number of players (prompted for when omitted).
    #[arg(short, long)]
    players: Option<usize>,
    /// Shuffle seed (defaults to the current time).
    #[arg(short, long)]
    seed: Option<u64>,
    /// Deal leftover cards to the first players instead of setting them aside.
    #[arg(long)]
    deal_out: bool,
    /// Keep the rotation intact when a player drops out.
    #[arg(long)]
    keep_turn_order: bool,
    /// Skip players with empty hands instead of letting them pass.
    #[arg(long)]
    skip_empty: bool,
    /// Log every turn change.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> GameOptions {
        let mut options = GameOptions::default();
        if self.deal_out {
            options = options.with_remainder(RemainderPolicy::DealOut);
        }
        if self.keep_turn_order {
            options = options.with_removal(RemovalPolicy::KeepNextInOrder);
        }
        if self.skip_empty {
            options = options.with_empty_hand(EmptyHandPolicy::Skip);
        }
        options
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err()
    {
        eprintln!("logger already initialized");
    }

    println!("Snap CLI example (type 'q' to quit)");

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let count = match args.players {
        Some(count) => count,
        None => match prompt_usize("Number of players: ") {
            Some(count) => count,
            None => return,
        },
    };

    let mut names = Vec::with_capacity(count);
    for index in 1..=count {
        let Some(name) = prompt_line(&format!("Enter player {index} name: ")) else {
            return;
        };
        names.push(name);
    }

    let mut game = match SnapGame::start(names, args.options(), seed) {
        Ok(game) => game.with_observer(LogObserver),
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    loop {
        if let GameState::Over { winner } = game.state() {
            match winner {
                Some(winner) => println!("Game over. {winner} wins!"),
                None => println!("No players have any cards left. The game is over."),
            }
            break;
        }

        print_table(&game.view());

        let Some(input) = prompt_line("Press enter to play a card: ") else {
            return;
        };
        if matches!(input.to_lowercase().as_str(), "q" | "quit") {
            println!("Goodbye.");
            return;
        }

        match game.advance() {
            Ok(round) => {
                if round.is_snap() {
                    println!("Snap! {} collects {} cards.", round.player, round.claimed);
                }
                for name in &round.eliminated {
                    println!("{name} is out of the game.");
                }
            }
            Err(err) => {
                println!("Play error: {err}");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &TableView) {
    let pile = view
        .pile_top
        .as_ref()
        .map_or_else(|| "Empty".to_string(), format_card);
    println!("\nMiddle deck: {pile} ({} cards)", view.pile_len);

    for player in &view.players {
        let marker = if view.current_player.as_deref() == Some(player.name.as_str()) {
            "*"
        } else {
            " "
        };
        let top = player
            .top_card
            .as_ref()
            .map_or_else(|| "Empty".to_string(), format_card);
        println!(
            "{marker} {}'s cards: {} | top {top}",
            player.name, player.hand_size
        );
    }

    if let Some(current) = &view.current_player {
        println!("{current}, press enter to place your card.");
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
