//! Unit tests for streak reconstruction

use super::*;
use crate::storage::{TeamLabels, Value};

fn game(n: u32, team_score: Option<u32>, opponent_score: Option<u32>) -> GameResult {
    GameResult {
        game_id: format!("00223{:05}", n),
        date: format!("2023-11-{:02}", n),
        start_time: Some("19:30".to_string()),
        venue: if n % 2 == 0 { Venue::Home } else { Venue::Away },
        opponent: "NYK".to_string(),
        team_score,
        opponent_score,
        overtime: false,
    }
}

fn win(n: u32) -> GameResult {
    game(n, Some(110), Some(100))
}

fn loss(n: u32) -> GameResult {
    game(n, Some(95), Some(101))
}

fn labels(states: &[StreakState]) -> Vec<Option<&str>> {
    states.iter().map(|s| s.streak.as_deref()).collect()
}

#[test]
fn test_five_wins_then_a_loss() {
    let games = vec![win(1), win(2), win(3), win(4), win(5), loss(6)];
    let states = reconstruct_streaks(&games);

    assert_eq!(
        labels(&states),
        vec![
            Some("W1"),
            Some("W2"),
            Some("W3"),
            Some("W4"),
            Some("W5"),
            Some("L1")
        ]
    );
    assert_eq!(states[5].wins, 5);
    assert_eq!(states[5].losses, 1);
}

#[test]
fn test_alternating_results_reset_every_game() {
    let games = vec![win(1), loss(2), win(3), loss(4)];
    let states = reconstruct_streaks(&games);
    assert_eq!(
        labels(&states),
        vec![Some("W1"), Some("L1"), Some("W1"), Some("L1")]
    );
}

#[test]
fn test_unknown_outcome_breaks_the_streak() {
    let games = vec![win(1), win(2), game(3, None, Some(99)), win(4), win(5)];
    let states = reconstruct_streaks(&games);

    assert_eq!(
        labels(&states),
        vec![Some("W1"), Some("W2"), None, Some("W1"), Some("W2")]
    );
    assert_eq!(states[2].outcome, None);
    // Counters are carried through the unknown row unchanged.
    assert_eq!((states[2].wins, states[2].losses), (2, 0));
    assert_eq!(states[2].g, 3);
}

#[test]
fn test_record_counts_exclude_unknown_rows() {
    let games = vec![
        loss(1),
        game(2, None, None),
        win(3),
        game(4, Some(100), None),
        loss(5),
        loss(6),
    ];
    let states = reconstruct_streaks(&games);

    let mut unknown = 0;
    for (k, (state, game)) in states.iter().zip(&games).enumerate() {
        if classify(game).is_none() {
            unknown += 1;
        }
        assert_eq!(state.g as usize, k + 1);
        assert_eq!((state.wins + state.losses) as usize, k + 1 - unknown);
        if let Some(label) = &state.streak {
            let run: u32 = label[1..].parse().unwrap();
            assert!(run <= state.g);
        }
    }
    assert_eq!(states[5].streak.as_deref(), Some("L2"));
}

#[test]
fn test_tied_score_counts_as_loss() {
    assert_eq!(classify(&game(1, Some(100), Some(100))), Some(Outcome::Loss));
}

#[test]
fn test_empty_input() {
    assert!(reconstruct_streaks(&[]).is_empty());
    assert!(schedule_view(&[]).is_empty());
}

#[test]
fn test_chronological_check() {
    assert!(is_chronological(&[win(1), win(2), win(3)]));
    assert!(!is_chronological(&[win(2), win(1)]));

    // Same date falls back to start time, then game id.
    let mut early = win(4);
    early.start_time = Some("12:00".to_string());
    let late = win(4);
    assert!(is_chronological(&[early.clone(), late.clone()]));
    assert!(!is_chronological(&[late, early]));
}

#[test]
fn test_unsorted_input_is_scanned_as_given() {
    let games = vec![loss(3), win(1), win(2)];
    let states = reconstruct_streaks(&games);
    assert_eq!(labels(&states), vec![Some("L1"), Some("W1"), Some("W2")]);
}

#[test]
fn test_reconstruction_is_repeatable() {
    let games = vec![win(1), loss(2), loss(3), win(4)];
    assert_eq!(reconstruct_streaks(&games), reconstruct_streaks(&games));
}

#[test]
fn test_schedule_view_projects_markers() {
    let mut overtime_game = win(2);
    overtime_game.overtime = true;
    let rows = schedule_view(&[win(1), overtime_game]);

    assert_eq!(rows[0].home_away, "@");
    assert_eq!(rows[1].home_away, "");
    assert_eq!(rows[0].ot, "");
    assert_eq!(rows[1].ot, "OT");
    assert_eq!(rows[1].streak.as_deref(), Some("W2"));
    assert_eq!(rows[1].w, 2);
    assert_eq!(rows[1].tm, Some(110));
    assert_eq!(rows[1].opp_pts, Some(100));
}

#[test]
fn test_game_log_view_adds_box_columns() {
    let totals = TeamGameTotals {
        game_id: "0022300001".to_string(),
        team_id: "BOS".to_string(),
        field_goals_made: Some(42),
        field_goals_attempted: Some(88),
        three_pointers_made: Some(15),
        three_pointers_attempted: Some(0),
        free_throws_made: Some(11),
        free_throws_attempted: Some(14),
        ..Default::default()
    };
    let entries = vec![GameLogEntry {
        result: win(1),
        totals,
    }];

    let rows = game_log_view(&entries);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fg, Some(42));
    assert_eq!(rows[0].fg_pct, Some(0.477));
    assert_eq!(rows[0].threep_pct, None);
    assert_eq!(rows[0].ft_pct, Some(0.786));
    assert_eq!(rows[0].streak.as_deref(), Some("W1"));
}

#[test]
fn test_game_log_and_schedule_share_one_scan() {
    let games = vec![win(1), game(2, None, None), win(3), loss(4), loss(5)];
    let entries: Vec<GameLogEntry> = games
        .iter()
        .map(|g| GameLogEntry {
            result: g.clone(),
            // Box totals missing entirely.
            totals: TeamGameTotals::default(),
        })
        .collect();

    let schedule = schedule_view(&games);
    let log = game_log_view(&entries);

    assert_eq!(log.len(), schedule.len());
    for (s, l) in schedule.iter().zip(&log) {
        assert_eq!(
            (s.g, &s.game_id, s.wl, s.w, s.l, &s.streak),
            (l.g, &l.game_id, l.wl, l.w, l.l, &l.streak)
        );
    }
    assert_eq!(log[2].streak.as_deref(), Some("W1"));
    assert_eq!(log[4].streak.as_deref(), Some("L2"));
    assert_eq!(log[0].fg_pct, None);
}

fn games_row(home: &str, away: &str, home_score: Value, away_score: Value) -> Row {
    Row::new()
        .with("game_id", "0022300010")
        .with("game_date", "2023-11-10")
        .with("game_time", "19:00")
        .with("home_team_id", home)
        .with("away_team_id", away)
        .with("home_team_score", home_score)
        .with("away_team_score", away_score)
}

#[test]
fn test_decode_home_game() {
    let directory: TeamLabels = [("1", "BOS"), ("2", "NYK")].into_iter().collect();
    let row = games_row("1", "2", Value::Integer(120), Value::Integer(111));

    let result = game_result_from_row(&row, "1", &directory).unwrap();
    assert_eq!(result.venue, Venue::Home);
    assert_eq!(result.opponent, "NYK");
    assert_eq!(result.team_score, Some(120));
    assert_eq!(result.opponent_score, Some(111));
    assert!(!result.overtime);
}

#[test]
fn test_decode_away_game_with_overtime_and_unknown_opponent() {
    let directory: TeamLabels = [("1", "BOS")].into_iter().collect();
    let row = games_row("77", "1", Value::Integer(101), Value::Null).with("away_ot1", 9i64);

    let result = game_result_from_row(&row, "1", &directory).unwrap();
    assert_eq!(result.venue, Venue::Away);
    assert_eq!(result.opponent, "77");
    assert_eq!(result.team_score, None);
    assert_eq!(result.opponent_score, Some(101));
    assert!(result.overtime);
    assert_eq!(classify(&result), None);
}

#[test]
fn test_decode_rejects_foreign_game() {
    let row = games_row("3", "4", Value::Integer(1), Value::Integer(2));
    let result = game_result_from_row(&row, "1", &TeamLabels::new());
    assert!(matches!(result, Err(StatsError::TeamNotFound { .. })));
}

#[test]
fn test_decode_game_log_entry() {
    let row = games_row("1", "2", Value::Integer(99), Value::Integer(97))
        .with("field_goals_made", 37i64)
        .with("field_goals_attempted", 80i64)
        .with("turnovers", Value::Null);

    let entry = game_log_entry_from_row(&row, "1", &TeamLabels::new()).unwrap();
    assert_eq!(entry.totals.team_id, "1");
    assert_eq!(entry.totals.field_goals_made, Some(37));
    assert_eq!(entry.totals.turnovers, None);
    assert_eq!(entry.result.opponent, "2");
}
