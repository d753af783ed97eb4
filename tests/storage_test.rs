//! Integration tests for the SQLite row source

use hoops_stats::{
    engine::resolve_line_score,
    storage::*,
    GameId, StatsError,
};

fn create_file_db(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("data").join("nba.db");
    let db = StatsDatabase::create(&path).unwrap();
    db.connection()
        .execute_batch(
            "INSERT INTO teams (team_id, abbreviation, full_name)
             VALUES ('1610612744', 'GSW', 'Golden State Warriors'),
                    ('1610612747', 'LAL', 'Los Angeles Lakers');

             INSERT INTO games (game_id, season_id, game_date, home_team_id, away_team_id,
                                home_team_score, away_team_score)
             VALUES ('0022300061', '2023-24', '2023-10-24', '1610612744', '1610612747', 120, 118);

             INSERT INTO line_scores (game_id, team_id, team_abbreviation, is_home,
                                      pts_qtr1, pts_qtr2, pts_qtr3, pts_qtr4, pts)
             VALUES ('0022300061', '1610612747', 'LAL', 0, 30, 28, 30, 30, 118),
                    ('0022300061', '1610612744', NULL, 1, 31, 29, 30, 30, NULL);",
        )
        .unwrap();
    path
}

#[test]
fn test_create_then_open_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_file_db(&dir);

    let db = StatsDatabase::open(&path).unwrap();
    let labels = db.team_labels().unwrap();
    assert_eq!(labels.len(), 2);

    // Read-only handles refuse writes.
    assert!(db
        .connection()
        .execute("DELETE FROM teams", [])
        .is_err());
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = StatsDatabase::open(&dir.path().join("nope.db"));
    assert!(matches!(result, Err(StatsError::DatabaseNotFound { .. })));
}

#[test]
fn test_line_score_from_dedicated_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_file_db(&dir);
    let db = StatsDatabase::open(&path).unwrap();

    let lines = resolve_line_score(&db, &db, &GameId::new("0022300061")).unwrap();
    assert_eq!(lines.len(), 2);

    // Home first, label recovered from the directory, total filled from periods.
    assert_eq!(lines[0].team, "GSW");
    assert!(lines[0].is_home);
    assert_eq!(lines[0].total, Some(120));

    assert_eq!(lines[1].team, "LAL");
    assert_eq!(lines[1].total, Some(118));
    assert_eq!(lines[1].ot1, None);
}

#[test]
fn test_row_source_through_trait_object() {
    let db = StatsDatabase::open_in_memory().unwrap();
    let source: &dyn RowSource = &db;

    let rows = source
        .fetch_rows(&QuerySpec::GameLineColumns {
            game_id: GameId::new("0022300061"),
        })
        .unwrap();
    assert!(rows.is_empty());
}
