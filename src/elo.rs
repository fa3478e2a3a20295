use crate::constants::*;

/// Probability-like score of a side rated `a` against a side rated `b`.
pub fn expected(a: f64, b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((b - a) / ELO_STEP))
}

pub fn team_rating(team: [f64; 2]) -> f64 {
    (team[0] + team[1]) / 2.0
}

/// Rating change for every team1 member. Team2 members receive the negation.
pub fn team_delta(team1: [f64; 2], team2: [f64; 2], team1_won: bool) -> f64 {
    let pa = expected(team_rating(team1), team_rating(team2));
    let actual = if team1_won { 1.0 } else { 0.0 };
    K_FACTOR * (actual - pa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_teams_expect_half() {
        assert_eq!(expected(1500.0, 1500.0), 0.5);
        assert_eq!(team_delta([1500.0; 2], [1500.0; 2], true), 16.0);
        assert_eq!(team_delta([1500.0; 2], [1500.0; 2], false), -16.0);
    }

    #[test]
    fn team_strength_is_the_mean() {
        assert_eq!(team_rating([1600.0, 1400.0]), 1500.0);
        let delta = team_delta([1600.0, 1400.0], [1450.0, 1550.0], true);
        assert_eq!(delta, 16.0);
    }

    #[test]
    fn upset_moves_more_than_expected_win() {
        let favourite = team_delta([1700.0; 2], [1300.0; 2], true);
        let upset = team_delta([1300.0; 2], [1700.0; 2], true);
        assert!((favourite - 32.0 / 11.0).abs() < 1e-9);
        assert!(upset > 29.0 && upset < 32.0);
        assert!((favourite + upset - 32.0).abs() < 1e-9);
    }
}
