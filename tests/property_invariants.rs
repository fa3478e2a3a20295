use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use tempfile::TempDir;

use badminton_elo::elo::{expected, team_delta};
use badminton_elo::{generate_pairings, Error, Player, Store};

const NAMES: [&str; 8] = ["Ana", "Bo", "Cy", "Di", "Ed", "Flo", "Gus", "Hal"];

#[derive(Debug, Clone)]
struct Game {
    slots: [usize; 4],
    score1: u32,
    score2: u32,
}

fn game_strategy() -> impl Strategy<Value = Game> {
    (prop::array::uniform4(0..NAMES.len()), 0u32..31, 0u32..31)
        .prop_map(|(slots, score1, score2)| Game {
            slots,
            score1,
            score2,
        })
}

fn pool_strategy() -> impl Strategy<Value = BTreeMap<String, Player>> {
    prop::collection::btree_map("[a-z]{1,6}", 1000.0f64..2000.0, 0..40).prop_map(|ratings| {
        ratings
            .into_iter()
            .map(|(id, rating)| {
                (
                    id,
                    Player {
                        rating,
                        ..Player::new()
                    },
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn delta_is_bounded_and_antisymmetric(
        a in 0.0f64..3000.0,
        b in 0.0f64..3000.0,
        c in 0.0f64..3000.0,
        d in 0.0f64..3000.0,
        won in any::<bool>(),
    ) {
        let e = expected((a + b) / 2.0, (c + d) / 2.0);
        prop_assert!(e > 0.0 && e < 1.0);

        let delta = team_delta([a, b], [c, d], won);
        prop_assert!(delta > -32.0 && delta < 32.0);
        prop_assert_eq!(delta >= 0.0, won);

        let mirrored = team_delta([c, d], [a, b], !won);
        prop_assert!((delta + mirrored).abs() < 1e-9);
    }

    #[test]
    fn recording_keeps_counters_and_rating_sum(games in prop::collection::vec(game_strategy(), 1..40)) {
        let mut store = Store::in_memory();
        for id in NAMES {
            store.ensure_player(id).unwrap();
        }

        for game in games {
            let [a, b, c, d] = game.slots.map(|i| NAMES[i]);
            let before = store.all().clone();
            store.record_match([a, b], [c, d], game.score1, game.score2).unwrap();

            let mut expected_matches: BTreeMap<&str, u32> = BTreeMap::new();
            let mut expected_wins: BTreeMap<&str, u32> = BTreeMap::new();
            for id in [a, b, c, d] {
                *expected_matches.entry(id).or_default() += 1;
            }
            let winners = if game.score1 > game.score2 { [a, b] } else { [c, d] };
            for id in winners {
                *expected_wins.entry(id).or_default() += 1;
            }

            for id in NAMES {
                let old = &before[id];
                let new = store.get(id).unwrap();
                prop_assert_eq!(new.matches, old.matches + expected_matches.get(id).copied().unwrap_or(0));
                prop_assert_eq!(new.wins, old.wins + expected_wins.get(id).copied().unwrap_or(0));
            }

            let total: f64 = store.all().values().map(|p| p.rating).sum();
            prop_assert!((total - 1500.0 * NAMES.len() as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn pairings_use_each_player_at_most_once(
        players in pool_strategy(),
        n in prop_oneof![0usize..12, (usize::MAX / 4)..=usize::MAX],
    ) {
        let want = n.checked_mul(4).unwrap_or(usize::MAX);
        match generate_pairings(&players, n) {
            Ok(pairings) => {
                prop_assert!(players.len() >= want);
                prop_assert_eq!(pairings.len(), n);
                let used: BTreeSet<&String> = pairings
                    .iter()
                    .flat_map(|p| p.team1.iter().chain(p.team2.iter()))
                    .collect();
                prop_assert_eq!(used.len(), 4 * n);
                prop_assert!(used.iter().all(|id| players.contains_key(*id)));
            }
            Err(Error::InsufficientPlayers { needed, available }) => {
                prop_assert!(players.len() < want);
                prop_assert_eq!((needed, available), (want, players.len()));
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn ensure_player_twice_changes_nothing(id in "[A-Za-z]{1,10}") {
        let mut store = Store::in_memory();
        prop_assert!(store.ensure_player(&id).unwrap());
        let first = store.get(&id).unwrap().clone();
        prop_assert!(!store.ensure_player(&id).unwrap());
        prop_assert_eq!(store.get(&id).unwrap(), &first);
        prop_assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn ratings_reload_bit_for_bit(ratings in prop::collection::vec(0.0f64..3000.0, 1..50)) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");
        let players: Vec<_> = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| format!(r#""p{i}": {{"rating": {r}, "matches": 0, "wins": 0}}"#))
            .collect();
        std::fs::write(
            &path,
            format!(r#"{{"players": {{{}}}, "matches": []}}"#, players.join(", ")),
        )
        .unwrap();

        let store = Store::require(&path).unwrap();
        for (i, r) in ratings.iter().enumerate() {
            let loaded = store.get(&format!("p{i}")).unwrap().rating;
            prop_assert_eq!(loaded.to_bits(), r.to_bits());
        }
    }
}
