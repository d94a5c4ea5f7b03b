//! BracketError.

use crate::models::game::Side;

/// Errors that can occur while building a bracket. All of them are precondition violations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// A tournament was requested without one of its two child brackets.
    MissingBracket(Side),
    /// No players to seed.
    EmptyRoster,
    /// Odd number of players: the last one has no opponent for a first-round match.
    UnpairedPlayer { count: usize },
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::MissingBracket(Side::A) => write!(f, "Tournament is missing its left bracket"),
            BracketError::MissingBracket(Side::B) => write!(f, "Tournament is missing its right bracket"),
            BracketError::EmptyRoster => write!(f, "Need at least 2 players to build a bracket"),
            BracketError::UnpairedPlayer { count } => {
                write!(f, "Cannot pair {} players into first-round matches", count)
            }
        }
    }
}

impl std::error::Error for BracketError {}
