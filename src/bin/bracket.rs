//! Demo driver: build a bracket and print its DFS, BFS and depth walks.
//! Run with: cargo run --bin bracket
//! Configure with env: BRACKET_PLAYERS (default 8), BRACKET_SEED (random seeding and
//! outcomes when set), BRACKET_FORMAT (`text` or `json`). Logs go to stderr (RUST_LOG).

use match_bracket::{
    build_bracket, first_player_wins, format_walk, random_winner, roster, shuffle_roster,
    DepthPrinter, Match,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

fn default_players() -> usize {
    8
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn parse_format(value: &str) -> Option<OutputFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

fn print_text(root: &Match) {
    println!("{}", format_walk(root.dfs()));
    println!("{}", format_walk(root.bfs()));

    let mut printer = DepthPrinter::new();
    root.accept(&mut printer);
    for line in printer.lines() {
        println!("{}", line);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let players: usize = std::env::var("BRACKET_PLAYERS")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or_else(default_players);
    let seed: Option<u64> = std::env::var("BRACKET_SEED")
        .ok()
        .and_then(|s| s.parse().ok());
    let format = std::env::var("BRACKET_FORMAT")
        .ok()
        .and_then(|f| parse_format(&f))
        .unwrap_or_else(default_format);
    log::info!(
        "Building bracket: {} players, seed {:?}, format {:?}",
        players,
        seed,
        format
    );

    let mut entrants = roster(players);
    let root = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffle_roster(&mut entrants, &mut rng);
            build_bracket(entrants, random_winner(&mut rng))?
        }
        None => build_bracket(entrants, first_player_wins)?,
    };
    log::info!(
        "Bracket ready: {} matches over {} rounds, champion {}",
        root.match_count(),
        root.height(),
        root.winner().name()
    );

    match format {
        OutputFormat::Text => print_text(&root),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&root)?),
    }
    Ok(())
}
