//! Plain-text views of the store for the menus, plus the CSV ranking export.

use crate::elo::team_rating;
use crate::error::Result;
use crate::pairing::Pairing;
use crate::store::{Player, Store};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Players ordered by rating, highest first. Equal ratings keep identifier order.
pub fn rankings(players: &BTreeMap<String, Player>) -> Vec<(&str, &Player)> {
    let mut ranked: Vec<_> = players.iter().map(|(id, p)| (id.as_str(), p)).collect();
    ranked.sort_by_key(|(_, p)| Reverse(OrderedFloat(p.rating)));
    ranked
}

pub fn write_rankings(w: &mut impl Write, players: &BTreeMap<String, Player>) -> io::Result<()> {
    if players.is_empty() {
        return writeln!(w, "No players registered yet!");
    }
    writeln!(w, "Name           Rating  Matches  Wins  Win Rate")?;
    writeln!(w, "{}", "=".repeat(50))?;
    for (name, p) in rankings(players) {
        writeln!(
            w,
            "{:<14} {:>6.1} {:>8} {:>5} {:>8.1}%",
            name,
            p.rating,
            p.matches,
            p.wins,
            p.win_rate()
        )?;
    }
    Ok(())
}

pub fn write_player_stats(w: &mut impl Write, name: &str, p: &Player) -> io::Result<()> {
    writeln!(w, "Statistics for {name}:")?;
    writeln!(w, "Rating: {:.1}", p.rating)?;
    writeln!(w, "Matches played: {}", p.matches)?;
    writeln!(w, "Wins: {}", p.wins)?;
    writeln!(w, "Win rate: {:.1}%", p.win_rate())
}

/// Match log, newest first.
pub fn write_history(w: &mut impl Write, store: &Store) -> io::Result<()> {
    if store.matches().is_empty() {
        return writeln!(w, "No matches recorded yet!");
    }
    for (i, m) in store.matches().iter().rev().enumerate() {
        let [a, b] = &m.team1_players;
        let [c, d] = &m.team2_players;
        writeln!(w)?;
        writeln!(w, "Match {}:", i + 1)?;
        writeln!(w, "Date: {}", m.date.format(HISTORY_DATE_FORMAT))?;
        writeln!(w, "Team 1: {a} & {b}")?;
        writeln!(w, "Team 2: {c} & {d}")?;
        writeln!(w, "Score: {} - {}", m.team1_score, m.team2_score)?;
    }
    Ok(())
}

pub fn write_pairings(
    w: &mut impl Write,
    pairings: &[Pairing],
    players: &BTreeMap<String, Player>,
) -> io::Result<()> {
    for (i, pairing) in pairings.iter().enumerate() {
        let (ratings1, ratings2) = pairing.ratings(players);
        writeln!(w)?;
        writeln!(w, "Match {}:", i + 1)?;
        for (label, team, ratings) in [
            ("Team 1", &pairing.team1, ratings1),
            ("Team 2", &pairing.team2, ratings2),
        ] {
            writeln!(
                w,
                "{label}: {} ({:.1}) & {} ({:.1})",
                team[0], ratings[0], team[1], ratings[1]
            )?;
            writeln!(w, "       Average rating: {:.1}", team_rating(ratings))?;
        }
    }
    Ok(())
}

/// Writes the current rankings as CSV to `path`.
pub fn export_csv(players: &BTreeMap<String, Player>, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut buf = BufWriter::new(file);
    writeln!(&mut buf, "rank,name,rating,matches,wins,win_rate")?;
    for (rank, (name, p)) in rankings(players).into_iter().enumerate() {
        writeln!(
            &mut buf,
            "{},{},{:.1},{},{},{:.1}",
            rank + 1,
            csv_field(name),
            p.rating,
            p.matches,
            p.wins,
            p.win_rate()
        )?;
    }
    buf.flush()?;
    info!(path = %path.display(), players = players.len(), "exported rankings");
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
