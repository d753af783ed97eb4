//! Integration tests for command handlers

use hoops_stats::{
    commands::{
        common::CommandContext, game_data::handle_four_factors, resolve_db_path,
        standings::handle_standings, team_data::handle_schedule,
    },
    storage::StatsDatabase,
    GameId, SeasonId, TeamId,
};
use std::path::PathBuf;

fn seeded_context() -> CommandContext {
    let db = StatsDatabase::open_in_memory().unwrap();
    db.connection()
        .execute_batch(
            "INSERT INTO teams (team_id, abbreviation, conference)
             VALUES ('1610612743', 'DEN', 'West'), ('1610612750', 'MIN', 'West');

             INSERT INTO games (game_id, season_id, game_date, home_team_id, away_team_id,
                                home_team_score, away_team_score)
             VALUES ('0022300010', '2023-24', '2023-10-24', '1610612743', '1610612750', 119, 107);

             INSERT INTO team_game_stats (game_id, team_id, field_goals_made,
                                          field_goals_attempted, free_throws_attempted,
                                          offensive_rebounds, defensive_rebounds,
                                          turnovers, points)
             VALUES ('0022300010', '1610612743', 47, 90, 15, 9, 38, 11, 119),
                    ('0022300010', '1610612750', 40, 88, 20, 10, 36, 13, 107);

             INSERT INTO team_season_stats (team_id, season_id, wins, losses, games_played,
                                            points_per_game, opponent_points_per_game)
             VALUES ('1610612743', '2023-24', 57, 25, 82, 114.9, 109.6),
                    ('1610612750', '2023-24', 56, 26, 82, 113.0, 106.5);",
        )
        .unwrap();
    CommandContext::from_database(db)
}

#[test]
fn test_resolve_db_path_from_option() {
    let path = resolve_db_path(Some(PathBuf::from("stats.db"))).unwrap();
    assert_eq!(path, PathBuf::from("stats.db"));
}

#[test]
fn test_handlers_run_text_and_json() {
    let ctx = seeded_context();

    handle_four_factors(&ctx, &GameId::new("0022300010"), false).unwrap();
    handle_four_factors(&ctx, &GameId::new("0022300010"), true).unwrap();
    handle_standings(&ctx, &SeasonId::new("2023-24"), None, false).unwrap();
    handle_standings(&ctx, &SeasonId::new("2023-24"), Some("west".to_string()), true).unwrap();
    handle_schedule(&ctx, &TeamId::new("DEN"), false).unwrap();
}

#[test]
fn test_handlers_tolerate_missing_data() {
    let ctx = seeded_context();

    handle_four_factors(&ctx, &GameId::new("missing"), false).unwrap();
    handle_standings(&ctx, &SeasonId::new("1999-00"), None, false).unwrap();
}

#[test]
fn test_schedule_unknown_team_is_error() {
    let ctx = seeded_context();
    let err = handle_schedule(&ctx, &TeamId::new("ZZZ"), false).unwrap_err();
    assert!(err.to_string().contains("Team not found"));
}
