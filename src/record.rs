use crate::elo::team_delta;
use crate::error::Result;
use crate::store::{Match, Store, Timestamp};
use tracing::info;

impl Store {
    /// Records a finished doubles match and returns the rating change applied
    /// to each team1 member (team2 members get the negation).
    ///
    /// Unknown players are registered on the fly. A team1 win needs a strictly
    /// higher score, so a tie counts as a team2 win. Repeated identifiers are
    /// not rejected and are counted once per slot.
    pub fn record_match(
        &mut self,
        team1: [&str; 2],
        team2: [&str; 2],
        score1: u32,
        score2: u32,
    ) -> Result<f64> {
        let slots = team1.iter().chain(team2.iter());
        for id in slots.clone() {
            self.ensure_player(id)?;
        }
        for id in slots {
            self.player_mut(id)?.matches += 1;
        }

        let team1_won = score1 > score2;
        let winners = if team1_won { team1 } else { team2 };
        for id in winners {
            self.player_mut(id)?.wins += 1;
        }

        let ratings = |team: [&str; 2]| -> Result<[f64; 2]> {
            Ok([self.get(team[0])?.rating, self.get(team[1])?.rating])
        };
        let delta = team_delta(ratings(team1)?, ratings(team2)?, team1_won);
        for id in team1 {
            self.player_mut(id)?.rating += delta;
        }
        for id in team2 {
            self.player_mut(id)?.rating -= delta;
        }

        self.push_match(Match {
            date: Timestamp::now(),
            team1_players: team1.map(str::to_string),
            team2_players: team2.map(str::to_string),
            team1_score: score1,
            team2_score: score2,
        });
        info!(
            team1 = ?team1,
            team2 = ?team2,
            score1,
            score2,
            delta,
            "recorded match"
        );
        self.save()?;
        Ok(delta)
    }
}
