//! Integration tests for the derived-statistics engine

use hoops_stats::engine::{
    compute_four_factors, estimate_possessions, pythagorean_record, reconstruct_streaks,
    schedule_view, GameResult, Outcome, TeamGameTotals, Venue,
};

fn totals(team_id: &str) -> TeamGameTotals {
    TeamGameTotals {
        game_id: "0022300001".to_string(),
        team_id: team_id.to_string(),
        ..Default::default()
    }
}

fn played(date: &str, team_score: u32, opponent_score: u32) -> GameResult {
    GameResult {
        game_id: format!("g-{}", date),
        date: date.to_string(),
        start_time: Some("19:30".to_string()),
        venue: Venue::Home,
        opponent: "NYK".to_string(),
        team_score: Some(team_score),
        opponent_score: Some(opponent_score),
        overtime: false,
    }
}

#[test]
fn test_possession_estimate_reference_game() {
    let team = TeamGameTotals {
        field_goals_made: Some(40),
        field_goals_attempted: Some(85),
        free_throws_made: Some(15),
        free_throws_attempted: Some(20),
        offensive_rebounds: Some(10),
        turnovers: Some(12),
        ..totals("1610612738")
    };
    let opponent = TeamGameTotals {
        defensive_rebounds: Some(35),
        ..totals("1610612752")
    };

    // 85 + 0.4 * 20 - 1.07 * (10 / 45) * 45 + 12
    let poss = estimate_possessions(&team, Some(&opponent)).unwrap();
    assert!((poss - 94.3).abs() < 1e-9);
}

#[test]
fn test_pythagorean_stronger_team_wins_more() {
    let record = pythagorean_record(Some(115.0), Some(110.0), Some(82));

    let pw = record.pw.unwrap();
    let pl = record.pl.unwrap();
    assert!(pw > 41.0);
    assert!(pw < 82.0);
    assert!((pw + pl - 82.0).abs() < 1e-9);
}

#[test]
fn test_pythagorean_even_scoring_splits_games() {
    let record = pythagorean_record(Some(110.0), Some(110.0), Some(82));
    assert_eq!(record.pw, Some(41.0));
    assert_eq!(record.pl, Some(41.0));
}

#[test]
fn test_win_streak_then_loss() {
    let games: Vec<_> = (1..=6)
        .map(|day| {
            let date = format!("2023-11-{:02}", day);
            if day < 6 {
                played(&date, 110, 100)
            } else {
                played(&date, 95, 101)
            }
        })
        .collect();

    let labels: Vec<_> = reconstruct_streaks(&games)
        .into_iter()
        .map(|s| s.streak.unwrap())
        .collect();
    assert_eq!(labels, vec!["W1", "W2", "W3", "W4", "W5", "L1"]);
}

#[test]
fn test_running_record_matches_outcomes() {
    let games = vec![
        played("2023-11-01", 100, 90),
        played("2023-11-03", 90, 100),
        played("2023-11-05", 100, 100),
        played("2023-11-07", 120, 119),
    ];

    let states = reconstruct_streaks(&games);
    for (i, state) in states.iter().enumerate() {
        let upto = &states[..=i];
        let wins = upto.iter().filter(|s| s.outcome == Some(Outcome::Win)).count() as u32;
        let losses = upto.iter().filter(|s| s.outcome == Some(Outcome::Loss)).count() as u32;
        assert_eq!((state.wins, state.losses), (wins, losses));
        assert_eq!(state.g, i as u32 + 1);
    }

    // Equal scores count as a loss.
    assert_eq!(states[2].outcome, Some(Outcome::Loss));
    assert_eq!(states[2].streak.as_deref(), Some("L2"));
}

#[test]
fn test_schedule_view_keeps_input_order() {
    let games = vec![played("2023-11-05", 100, 90), played("2023-11-01", 90, 100)];
    let rows = schedule_view(&games);

    assert_eq!(rows[0].date, "2023-11-05");
    assert_eq!(rows[0].streak.as_deref(), Some("W1"));
    assert_eq!(rows[1].streak.as_deref(), Some("L1"));
}

#[test]
fn test_zero_attempts_give_absent_ratios() {
    let team = TeamGameTotals {
        field_goals_made: Some(0),
        field_goals_attempted: Some(0),
        three_pointers_made: Some(0),
        free_throws_made: Some(0),
        free_throws_attempted: Some(0),
        offensive_rebounds: Some(0),
        turnovers: Some(0),
        points: Some(0),
        ..totals("1610612738")
    };

    let ff = compute_four_factors(&team, None, "BOS".to_string());
    assert_eq!(ff.effective_fg_pct, None);
    assert_eq!(ff.free_throw_rate, None);
    assert_eq!(ff.possessions, Some(0.0));
    assert_eq!(ff.turnover_pct, None);
    assert_eq!(ff.offensive_rating, None);
}

#[test]
fn test_four_factors_pace_is_shared() {
    let home = TeamGameTotals {
        field_goals_made: Some(41),
        field_goals_attempted: Some(88),
        three_pointers_made: Some(13),
        free_throws_made: Some(17),
        free_throws_attempted: Some(22),
        offensive_rebounds: Some(9),
        defensive_rebounds: Some(33),
        turnovers: Some(14),
        points: Some(112),
        ..totals("1610612738")
    };
    let away = TeamGameTotals {
        field_goals_made: Some(39),
        field_goals_attempted: Some(86),
        three_pointers_made: Some(12),
        free_throws_made: Some(14),
        free_throws_attempted: Some(18),
        offensive_rebounds: Some(11),
        defensive_rebounds: Some(35),
        turnovers: Some(12),
        points: Some(104),
        ..totals("1610612752")
    };

    let home_ff = compute_four_factors(&home, Some(&away), "BOS".to_string());
    let away_ff = compute_four_factors(&away, Some(&home), "NYK".to_string());

    assert_eq!(home_ff.pace, away_ff.pace);
    assert_eq!(home_ff.offensive_rating, away_ff.defensive_rating);
    assert_eq!(home_ff.defensive_rating, away_ff.offensive_rating);
    for ff in [&home_ff, &away_ff] {
        let efg = ff.effective_fg_pct.unwrap();
        assert!((0.0..=1.5).contains(&efg));
        let orb = ff.offensive_rebound_pct.unwrap();
        assert!((0.0..=1.0).contains(&orb));
    }
}
