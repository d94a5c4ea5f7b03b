//! Match node: a single match (leaf) or a tournament joining two brackets (composite).

use crate::models::error::BracketError;
use crate::models::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for a match node.
pub type MatchId = Uuid;

/// Which participant of a match advanced.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    /// `A` when the first participant wins, `B` otherwise.
    pub fn from_first_wins(first_wins: bool) -> Self {
        if first_wins {
            Side::A
        } else {
            Side::B
        }
    }
}

/// The two sub-brackets of a tournament node, owned exclusively by it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
struct Brackets {
    left: Match,
    right: Match,
}

/// A completed pairing with a recorded winner.
///
/// Leaves are single matches between two seeded players. Composite nodes are tournaments
/// whose participants are the winners of their left and right brackets, fixed when the
/// node is built. Nothing is mutable after construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Match {
    id: MatchId,
    player_a: Arc<Player>,
    player_b: Arc<Player>,
    winner: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    brackets: Option<Box<Brackets>>,
}

impl Match {
    /// Leaf match between `a` and `b`.
    pub fn single(a: Arc<Player>, b: Arc<Player>, a_wins: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_a: a,
            player_b: b,
            winner: Side::from_first_wins(a_wins),
            brackets: None,
        }
    }

    /// Tournament joining two finished brackets; its players are their winners.
    pub fn tournament(left: Match, right: Match, left_wins: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_a: Arc::clone(left.winner()),
            player_b: Arc::clone(right.winner()),
            winner: Side::from_first_wins(left_wins),
            brackets: Some(Box::new(Brackets { left, right })),
        }
    }

    /// Like [`Match::tournament`], rejecting an absent child up front.
    pub fn try_tournament(
        left: Option<Match>,
        right: Option<Match>,
        left_wins: bool,
    ) -> Result<Self, BracketError> {
        let left = left.ok_or(BracketError::MissingBracket(Side::A))?;
        let right = right.ok_or(BracketError::MissingBracket(Side::B))?;
        Ok(Self::tournament(left, right, left_wins))
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn player_a(&self) -> &Arc<Player> {
        &self.player_a
    }

    pub fn player_b(&self) -> &Arc<Player> {
        &self.player_b
    }

    /// Which side advanced.
    pub fn winning_side(&self) -> Side {
        self.winner
    }

    /// The advancing player; always one of `player_a` / `player_b`.
    pub fn winner(&self) -> &Arc<Player> {
        match self.winner {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    pub fn is_single(&self) -> bool {
        self.brackets.is_none()
    }

    /// Left and right brackets, or `None` for a single match.
    pub fn brackets(&self) -> Option<(&Match, &Match)> {
        self.brackets.as_deref().map(|b| (&b.left, &b.right))
    }

    pub fn left_bracket(&self) -> Option<&Match> {
        self.brackets().map(|(left, _)| left)
    }

    pub fn right_bracket(&self) -> Option<&Match> {
        self.brackets().map(|(_, right)| right)
    }

    /// Number of match nodes in this bracket, this one included.
    pub fn match_count(&self) -> usize {
        self.dfs().count()
    }

    /// Number of levels: 1 for a single match.
    pub fn height(&self) -> usize {
        let mut height = 0;
        self.walk_with_depth(|_, depth| height = height.max(depth + 1));
        height
    }

    /// `[a, b, depth=D]`, as printed by the depth visitor.
    pub fn info(&self, depth: usize) -> String {
        format!(
            "[{}, {}, depth={}]",
            self.player_a.name(),
            self.player_b.name(),
            depth
        )
    }
}

impl Drop for Match {
    // Unlink brackets onto a heap stack so deep trees don't recurse on drop.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Brackets>> = self.brackets.take().into_iter().collect();
        while let Some(mut brackets) = pending.pop() {
            pending.extend(brackets.left.brackets.take());
            pending.extend(brackets.right.brackets.take());
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.player_a.name(), self.player_b.name())
    }
}
