//! CLI card game example.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use highcard::{Game, GameOptions, Player};

#[derive(Parser, Debug)]
#[command(name = "cli-card-game")]
#[command(about = "Deal a two-player high-score card game")]
struct Args {
    /// Number of game players (must be 2)
    num_players: usize,

    /// Sort the deck after shuffling
    #[arg(short, long)]
    sort: bool,

    /// Cards dealt to each player
    #[arg(short, long, default_value_t = 3)]
    cards: usize,

    /// Random seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Print every player's hand before the winner
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_player_count(args.num_players)
        .with_sort_deck(args.sort)
        .with_cards_per_player(args.cards);

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Game over. {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = game.play();
    if result.deck_exhausted {
        println!("Deck ran out after {} cards.", result.cards_dealt);
    }

    if args.verbose {
        for player in game.players() {
            println!("{}", format_player(player));
        }
    }

    println!("{} wins!", game.determine_winner());
    ExitCode::SUCCESS
}

fn format_player(player: &Player) -> String {
    let cards: Vec<String> = player.hand().iter().map(ToString::to_string).collect();
    format!(
        "{}: {} (score {})",
        player.name(),
        cards.join(", "),
        player.score()
    )
}
