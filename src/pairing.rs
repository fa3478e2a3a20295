use crate::constants::*;
use crate::elo::team_rating;
use crate::error::{Error, Result};
use crate::store::Player;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BTreeMap, VecDeque};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub team1: [String; 2],
    pub team2: [String; 2],
}

impl Pairing {
    /// Member ratings of each team. Players missing from `players` count as new.
    pub fn ratings(&self, players: &BTreeMap<String, Player>) -> ([f64; 2], [f64; 2]) {
        let lookup = |id: &String| players.get(id).map_or(ELO_BASE, |p| p.rating);
        (
            [lookup(&self.team1[0]), lookup(&self.team1[1])],
            [lookup(&self.team2[0]), lookup(&self.team2[1])],
        )
    }

    pub fn averages(&self, players: &BTreeMap<String, Player>) -> (f64, f64) {
        let (team1, team2) = self.ratings(players);
        (team_rating(team1), team_rating(team2))
    }
}

/// Splits the highest-rated `4 * n` players into `n` doubles matches.
///
/// Players are ranked by rating (ties by identifier) and drawn one at a time:
/// from the top while the remaining pool has even length, from the bottom
/// while it is odd. Of the four drawn for a match, the first and last form
/// team1 and the middle two form team2.
pub fn generate_pairings(players: &BTreeMap<String, Player>, n: usize) -> Result<Vec<Pairing>> {
    let available = players.len();
    let needed = n.checked_mul(PLAYERS_PER_MATCH).unwrap_or(usize::MAX);
    if available < needed {
        return Err(Error::InsufficientPlayers { needed, available });
    }

    let mut ranked: Vec<_> = players.iter().collect();
    ranked.sort_by_key(|(_, p)| Reverse(OrderedFloat(p.rating)));
    let mut pool: VecDeque<&String> = ranked.into_iter().map(|(id, _)| id).collect();

    let mut pairings = Vec::with_capacity(n);
    for _ in 0..n {
        let mut drawn = Vec::with_capacity(PLAYERS_PER_MATCH);
        for _ in 0..PLAYERS_PER_MATCH {
            let id = if pool.len() % 2 == 0 {
                pool.pop_front()
            } else {
                pool.pop_back()
            };
            drawn.push(id.ok_or_else(|| Error::InsufficientPlayers { needed, available })?);
        }
        pairings.push(Pairing {
            team1: [drawn[0].to_string(), drawn[3].to_string()],
            team2: [drawn[1].to_string(), drawn[2].to_string()],
        });
    }

    info!(matches = n, unused = pool.len(), "generated pairings");
    Ok(pairings)
}
