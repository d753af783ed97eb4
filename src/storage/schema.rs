//! Database schema and connection management

use super::row::TeamLabels;
use crate::error::{Result, StatsError};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Handle to the stats database.
///
/// Opened once by the caller and passed explicitly to whatever needs rows;
/// the connection closes when the handle is dropped.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open an existing database read-only.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StatsError::DatabaseNotFound {
                path: path.display().to_string(),
            });
        }

        debug!(path = %path.display(), "opening stats database read-only");
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Open (or create) a writable database and ensure tables exist.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening stats database read-write");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Underlying connection, for loading fixtures.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Snapshot of every team id and abbreviation.
    pub fn team_labels(&self) -> Result<TeamLabels> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_id, abbreviation FROM teams WHERE abbreviation IS NOT NULL")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut labels = TeamLabels::new();
        for row in rows {
            let (id, abbr) = row?;
            labels.insert(id, abbr);
        }
        Ok(labels)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id TEXT PRIMARY KEY,
                abbreviation TEXT,
                full_name TEXT,
                conference TEXT,
                division TEXT,
                logo_url TEXT,
                is_active INTEGER
            );

            CREATE TABLE IF NOT EXISTS games (
                game_id TEXT PRIMARY KEY,
                season_id TEXT,
                game_date TEXT NOT NULL,
                game_time TEXT,
                home_team_id TEXT NOT NULL,
                away_team_id TEXT NOT NULL,
                home_team_score INTEGER,
                away_team_score INTEGER,
                home_q1 INTEGER, home_q2 INTEGER, home_q3 INTEGER, home_q4 INTEGER,
                home_ot1 INTEGER, home_ot2 INTEGER, home_ot3 INTEGER, home_ot4 INTEGER,
                away_q1 INTEGER, away_q2 INTEGER, away_q3 INTEGER, away_q4 INTEGER,
                away_ot1 INTEGER, away_ot2 INTEGER, away_ot3 INTEGER, away_ot4 INTEGER
            );

            CREATE TABLE IF NOT EXISTS team_game_stats (
                stat_id INTEGER PRIMARY KEY AUTOINCREMENT,
                game_id TEXT NOT NULL,
                team_id TEXT NOT NULL,
                is_home INTEGER,
                field_goals_made INTEGER,
                field_goals_attempted INTEGER,
                three_pointers_made INTEGER,
                three_pointers_attempted INTEGER,
                free_throws_made INTEGER,
                free_throws_attempted INTEGER,
                offensive_rebounds INTEGER,
                defensive_rebounds INTEGER,
                turnovers INTEGER,
                points INTEGER,
                UNIQUE (game_id, team_id)
            );

            CREATE TABLE IF NOT EXISTS line_scores (
                game_id TEXT NOT NULL,
                team_id TEXT NOT NULL,
                team_abbreviation TEXT,
                is_home INTEGER,
                pts_qtr1 INTEGER, pts_qtr2 INTEGER, pts_qtr3 INTEGER, pts_qtr4 INTEGER,
                pts_ot1 INTEGER, pts_ot2 INTEGER, pts_ot3 INTEGER, pts_ot4 INTEGER,
                pts INTEGER,
                PRIMARY KEY (game_id, team_id)
            );

            CREATE TABLE IF NOT EXISTS team_season_stats (
                team_id TEXT NOT NULL,
                season_id TEXT NOT NULL,
                wins INTEGER,
                losses INTEGER,
                win_pct REAL,
                games_played INTEGER,
                points_per_game REAL,
                opponent_points_per_game REAL,
                games_behind REAL,
                pace REAL,
                offensive_rating REAL,
                defensive_rating REAL,
                net_rating REAL,
                simple_rating_system REAL,
                PRIMARY KEY (team_id, season_id)
            );

            CREATE INDEX IF NOT EXISTS idx_games_home ON games(home_team_id, game_date);
            CREATE INDEX IF NOT EXISTS idx_games_away ON games(away_team_id, game_date);
            CREATE INDEX IF NOT EXISTS idx_games_season ON games(season_id);
            CREATE INDEX IF NOT EXISTS idx_team_game_stats_game ON team_game_stats(game_id);",
        )?;

        Ok(())
    }
}
