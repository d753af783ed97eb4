//! SQL behind each [`QuerySpec`], plus the team directory lookups.

use super::row::{QuerySpec, Row, RowSource, TeamDirectory, Value};
use super::schema::StatsDatabase;
use crate::error::Result;
use rusqlite::types::ValueRef;
use rusqlite::{params, OptionalExtension, ToSql};
use tracing::{debug, warn};

const TEAM_TOTALS_COLUMNS: &str = "s.game_id, s.team_id, s.is_home,
    s.field_goals_made, s.field_goals_attempted,
    s.three_pointers_made, s.three_pointers_attempted,
    s.free_throws_made, s.free_throws_attempted,
    s.offensive_rebounds, s.defensive_rebounds, s.turnovers, s.points";

const GAME_COLUMNS: &str = "g.game_id, g.game_date, g.game_time,
    g.home_team_id, g.away_team_id, g.home_team_score, g.away_team_score,
    g.home_q1, g.home_q2, g.home_q3, g.home_q4,
    g.home_ot1, g.home_ot2, g.home_ot3, g.home_ot4,
    g.away_q1, g.away_q2, g.away_q3, g.away_q4,
    g.away_ot1, g.away_ot2, g.away_ot3, g.away_ot4";

/// SQL text and bound parameters for a spec.
fn build_query(spec: &QuerySpec) -> (String, Vec<Box<dyn ToSql>>) {
    match spec {
        QuerySpec::TeamGameTotals { game_id } => (
            format!(
                "SELECT {TEAM_TOTALS_COLUMNS}
                 FROM team_game_stats s
                 WHERE s.game_id = ?1
                 ORDER BY s.stat_id"
            ),
            vec![Box::new(game_id.as_str().to_string())],
        ),
        QuerySpec::SeasonTeamGameTotals { season_id } => (
            format!(
                "SELECT {TEAM_TOTALS_COLUMNS}
                 FROM team_game_stats s
                 JOIN games g ON g.game_id = s.game_id
                 WHERE g.season_id = ?1
                 ORDER BY g.game_date, g.game_time, g.game_id, s.stat_id"
            ),
            vec![Box::new(season_id.as_str().to_string())],
        ),
        QuerySpec::LineScores { game_id } => (
            "SELECT game_id, team_id, team_abbreviation, is_home,
                    pts_qtr1, pts_qtr2, pts_qtr3, pts_qtr4,
                    pts_ot1, pts_ot2, pts_ot3, pts_ot4, pts
             FROM line_scores
             WHERE game_id = ?1
             ORDER BY is_home DESC, team_id"
                .to_string(),
            vec![Box::new(game_id.as_str().to_string())],
        ),
        QuerySpec::GameLineColumns { game_id } => (
            format!("SELECT {GAME_COLUMNS} FROM games g WHERE g.game_id = ?1"),
            vec![Box::new(game_id.as_str().to_string())],
        ),
        QuerySpec::TeamGames { team_id } => (
            format!(
                "SELECT {GAME_COLUMNS}
                 FROM games g
                 WHERE g.home_team_id = ?1 OR g.away_team_id = ?1
                 ORDER BY g.game_date, g.game_time, g.game_id"
            ),
            vec![Box::new(team_id.clone())],
        ),
        QuerySpec::TeamGameLog { team_id } => (
            format!(
                "SELECT {GAME_COLUMNS},
                        s.field_goals_made, s.field_goals_attempted,
                        s.three_pointers_made, s.three_pointers_attempted,
                        s.free_throws_made, s.free_throws_attempted,
                        s.offensive_rebounds, s.defensive_rebounds,
                        s.turnovers, s.points
                 FROM games g
                 LEFT JOIN team_game_stats s
                   ON s.game_id = g.game_id AND s.team_id = ?1
                 WHERE g.home_team_id = ?1 OR g.away_team_id = ?1
                 ORDER BY g.game_date, g.game_time, g.game_id"
            ),
            vec![Box::new(team_id.clone())],
        ),
        QuerySpec::SeasonStandings {
            season_id,
            conference,
        } => {
            let mut query = String::from(
                "SELECT tss.team_id, tss.season_id, tss.wins, tss.losses, tss.win_pct,
                        tss.games_played, tss.points_per_game, tss.opponent_points_per_game,
                        tss.games_behind, tss.pace, tss.offensive_rating,
                        tss.defensive_rating, tss.net_rating, tss.simple_rating_system,
                        t.full_name, t.abbreviation, t.logo_url, t.conference, t.division
                 FROM team_season_stats tss
                 JOIN teams t ON tss.team_id = t.team_id
                 WHERE tss.season_id = ?1",
            );
            let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(season_id.as_str().to_string())];

            if let Some(conf) = conference {
                query.push_str(" AND t.conference = ?2 COLLATE NOCASE");
                params.push(Box::new(conf.clone()));
            }

            (query, params)
        }
    }
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
    }
}

impl RowSource for StatsDatabase {
    fn fetch_rows(&self, spec: &QuerySpec) -> Result<Vec<Row>> {
        let (query, params) = build_query(spec);
        debug!(?spec, "fetching rows");

        let mut stmt = self.conn.prepare(&query)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt.query_map(&param_refs[..], |row| {
            columns
                .iter()
                .enumerate()
                .map(|(i, name)| -> rusqlite::Result<(String, Value)> {
                    Ok((name.clone(), to_value(row.get_ref(i)?)))
                })
                .collect::<rusqlite::Result<Row>>()
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        debug!(rows = out.len(), "fetched rows");
        Ok(out)
    }
}

impl TeamDirectory for StatsDatabase {
    fn resolve_team_label(&self, team_id: &str) -> Option<String> {
        let result = self
            .conn
            .query_row(
                "SELECT abbreviation FROM teams WHERE team_id = ?",
                params![team_id],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional();

        match result {
            Ok(label) => label.flatten(),
            Err(e) => {
                warn!(team_id, error = %e, "team label lookup failed");
                None
            }
        }
    }

    fn resolve_team_id(&self, id_or_abbreviation: &str) -> Option<String> {
        let result = self
            .conn
            .query_row(
                "SELECT team_id FROM teams
                 WHERE team_id = ?1 OR abbreviation = ?1 COLLATE NOCASE
                 ORDER BY team_id = ?1 DESC
                 LIMIT 1",
                params![id_or_abbreviation],
                |row| row.get::<_, String>(0),
            )
            .optional();

        match result {
            Ok(id) => id,
            Err(e) => {
                warn!(id_or_abbreviation, error = %e, "team id lookup failed");
                None
            }
        }
    }
}
