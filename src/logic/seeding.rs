//! Bracket building: seed a roster into first-round matches, then play rounds until one root is left.

use crate::models::{BracketError, Match, Player, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Players named `"0"`, `"1"`, ... in seeding order.
pub fn roster(count: usize) -> Vec<Arc<Player>> {
    (0..count).map(|i| Arc::new(Player::new(i.to_string()))).collect()
}

/// Random seeding: shuffle the roster in place before building.
pub fn shuffle_roster<R: Rng>(players: &mut [Arc<Player>], rng: &mut R) {
    players.shuffle(rng);
}

/// Outcome where the first-listed participant always advances.
pub fn first_player_wins(_: &Player, _: &Player) -> Side {
    Side::A
}

/// Outcome drawn uniformly from `rng` for every match.
pub fn random_winner<R: Rng>(rng: &mut R) -> impl FnMut(&Player, &Player) -> Side + '_ {
    move |_, _| Side::from_first_wins(rng.gen_bool(0.5))
}

/// Build a full bracket from `players`.
///
/// 1. Adjacent players are paired into single matches.
/// 2. Adjacent matches are joined into tournaments, round by round, until one root remains.
///
/// `decide` picks the winner of every match from its two participants.
/// The roster must be non-empty and pair up evenly in every round (any power of two works).
pub fn build_bracket<F>(players: Vec<Arc<Player>>, mut decide: F) -> Result<Match, BracketError>
where
    F: FnMut(&Player, &Player) -> Side,
{
    if players.is_empty() {
        return Err(BracketError::EmptyRoster);
    }
    if players.len() % 2 != 0 {
        return Err(BracketError::UnpairedPlayer {
            count: players.len(),
        });
    }

    let mut round: Vec<Match> = players
        .chunks_exact(2)
        .map(|pair| {
            let side = decide(&*pair[0], &*pair[1]);
            Match::single(Arc::clone(&pair[0]), Arc::clone(&pair[1]), side == Side::A)
        })
        .collect();
    log::debug!("Round 1: {} single match(es)", round.len());

    let mut round_number = 1;
    while round.len() > 1 {
        round = play_round(round, &mut decide)?;
        round_number += 1;
        log::debug!("Round {}: {} tournament(s)", round_number, round.len());
    }
    round.pop().ok_or(BracketError::EmptyRoster)
}

/// Join adjacent matches of one round into the tournaments of the next.
fn play_round<F>(round: Vec<Match>, decide: &mut F) -> Result<Vec<Match>, BracketError>
where
    F: FnMut(&Player, &Player) -> Side,
{
    let mut next = Vec::with_capacity(round.len().div_ceil(2));
    let mut matches = round.into_iter();
    while let Some(left) = matches.next() {
        let right = matches.next();
        let left_wins = match &right {
            Some(right) => decide(left.winner().as_ref(), right.winner().as_ref()) == Side::A,
            None => true,
        };
        next.push(Match::try_tournament(Some(left), right, left_wins)?);
    }
    Ok(next)
}
