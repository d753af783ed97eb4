//! Per-period scoring resolved through an ordered chain of sources.
//!
//! 1. the dedicated line score table (one row per team);
//! 2. the period columns embedded in the games table, with team labels
//!    recovered from the team directory;
//! 3. nothing, which is an empty result rather than an error.

use super::types::{LineScore, LineSourceRow};
use crate::error::Result;
use crate::storage::{QuerySpec, Row, RowSource, TeamDirectory};
use crate::GameId;
use tracing::{debug, warn};


/// Decode a row of the dedicated line score table.
pub fn line_source_from_primary<D: TeamDirectory + ?Sized>(
    row: &Row,
    directory: &D,
) -> Result<LineSourceRow> {
    let team = match row.get_str("team_abbreviation")? {
        Some(abbr) => abbr,
        None => directory.label_or_id(&row.require_str("team_id")?),
    };

    Ok(LineSourceRow {
        team,
        is_home: row.get_bool("is_home")?.unwrap_or(false),
        quarters: [
            row.get_u32("pts_qtr1")?,
            row.get_u32("pts_qtr2")?,
            row.get_u32("pts_qtr3")?,
            row.get_u32("pts_qtr4")?,
        ],
        overtimes: [
            row.get_u32("pts_ot1")?,
            row.get_u32("pts_ot2")?,
            row.get_u32("pts_ot3")?,
            row.get_u32("pts_ot4")?,
        ],
        total: row.get_u32("pts")?,
    })
}

/// Split one games-table row into home and away line sources.
pub fn line_sources_from_game<D: TeamDirectory + ?Sized>(
    row: &Row,
    directory: &D,
) -> Result<[LineSourceRow; 2]> {
    let side = |prefix: &str, is_home: bool| -> Result<LineSourceRow> {
        let team_id = row.require_str(&format!("{}_team_id", prefix))?;
        Ok(LineSourceRow {
            team: directory.label_or_id(&team_id),
            is_home,
            quarters: [
                row.get_u32(&format!("{}_q1", prefix))?,
                row.get_u32(&format!("{}_q2", prefix))?,
                row.get_u32(&format!("{}_q3", prefix))?,
                row.get_u32(&format!("{}_q4", prefix))?,
            ],
            overtimes: [
                row.get_u32(&format!("{}_ot1", prefix))?,
                row.get_u32(&format!("{}_ot2", prefix))?,
                row.get_u32(&format!("{}_ot3", prefix))?,
                row.get_u32(&format!("{}_ot4", prefix))?,
            ],
            total: row.get_u32(&format!("{}_team_score", prefix))?,
        })
    };

    Ok([side("home", true)?, side("away", false)?])
}

/// Finalize a source row. When all four quarters are known the total is the
/// period sum, whether the stored total was missing or disagreed.
pub fn to_line_score(source: LineSourceRow) -> LineScore {
    let quarters_known = source.quarters.iter().all(Option::is_some);
    let period_sum: u32 = source
        .quarters
        .iter()
        .chain(source.overtimes.iter())
        .flatten()
        .sum();

    let total = match source.total {
        Some(stored) if quarters_known && stored != period_sum => {
            warn!(
                team = %source.team,
                stored,
                period_sum,
                "line score total disagrees with period scores; using period sum"
            );
            Some(period_sum)
        }
        Some(stored) => Some(stored),
        None if quarters_known => Some(period_sum),
        None => None,
    };

    let [q1, q2, q3, q4] = source.quarters;
    let [ot1, ot2, ot3, ot4] = source.overtimes;
    LineScore {
        team: source.team,
        is_home: source.is_home,
        q1,
        q2,
        q3,
        q4,
        ot1,
        ot2,
        ot3,
        ot4,
        total,
    }
}

/// Repair home flags on primary rows from the games table's `home_team_id`.
fn mark_home_from_game<S: RowSource + ?Sized>(
    source: &S,
    game_id: &GameId,
    primary: &[Row],
    rows: &mut [LineSourceRow],
) -> Result<()> {
    let game = source.fetch_rows(&QuerySpec::GameLineColumns {
        game_id: game_id.clone(),
    })?;
    let home_id = match game.first() {
        Some(row) => row.get_str("home_team_id")?,
        None => None,
    };
    let Some(home_id) = home_id else {
        warn!(game_id = %game_id, "line score rows lack a usable home flag");
        return Ok(());
    };

    debug!(game_id = %game_id, home_id = %home_id, "home flag taken from games table");
    for (row, line) in primary.iter().zip(rows.iter_mut()) {
        line.is_home = row.get_str("team_id")?.as_deref() == Some(home_id.as_str());
    }
    Ok(())
}

/// Resolve the line score for `game_id`: zero or two records, home first.
pub fn resolve_line_score<S, D>(source: &S, directory: &D, game_id: &GameId) -> Result<Vec<LineScore>>
where
    S: RowSource + ?Sized,
    D: TeamDirectory + ?Sized,
{
    let primary = source.fetch_rows(&QuerySpec::LineScores {
        game_id: game_id.clone(),
    })?;

    if primary.len() == 2 {
        let mut rows = primary
            .iter()
            .map(|row| line_source_from_primary(row, directory))
            .collect::<Result<Vec<_>>>()?;
        if rows.iter().filter(|r| r.is_home).count() != 1 {
            mark_home_from_game(source, game_id, &primary, &mut rows)?;
        }
        rows.sort_by_key(|r| !r.is_home);
        return Ok(rows.into_iter().map(to_line_score).collect());
    }
    if !primary.is_empty() {
        warn!(
            game_id = %game_id,
            rows = primary.len(),
            "line score table did not return exactly two teams; using games table"
        );
    }

    debug!(game_id = %game_id, "falling back to games table for line score");
    let fallback = source.fetch_rows(&QuerySpec::GameLineColumns {
        game_id: game_id.clone(),
    })?;

    let Some(row) = fallback.first() else {
        return Ok(Vec::new());
    };

    let sides = line_sources_from_game(row, directory)?;
    if sides.iter().all(LineSourceRow::is_empty) {
        return Ok(Vec::new());
    }
    Ok(sides.into_iter().map(to_line_score).collect())
}
