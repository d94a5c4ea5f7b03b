//! Single-elimination match bracket: models, builder and traversals.

pub mod logic;
pub mod models;

pub use logic::{
    build_bracket, first_player_wins, format_walk, random_winner, roster, shuffle_roster, Bfs,
    DepthPrinter, Dfs, MatchVisitor,
};
pub use models::{BracketError, Match, MatchId, Player, PlayerId, Side};
