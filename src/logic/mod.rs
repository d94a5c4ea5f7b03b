//! Bracket logic: seeding/building, iterative traversals, visitors.

mod seeding;
mod traversal;
mod visitor;

pub use seeding::{build_bracket, first_player_wins, random_winner, roster, shuffle_roster};
pub use traversal::{format_walk, Bfs, Dfs};
pub use visitor::{DepthPrinter, MatchVisitor};
