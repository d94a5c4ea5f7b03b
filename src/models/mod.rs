//! Data structures for the bracket: players, match nodes, errors.

mod error;
mod game;
mod player;

pub use error::BracketError;
pub use game::{Match, MatchId, Side};
pub use player::{Player, PlayerId};
