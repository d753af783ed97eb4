//! Running record and current-streak reconstruction over a team's games.
//!
//! One left-to-right pass with carried state. The input must already be
//! sorted by (date, start time, game id); the scan does not reorder, it only
//! warns when the order is violated.

use super::safe_math::{clamp_round, count, safe_div};
use super::types::{
    GameLogEntry, GameLogRow, GameResult, Outcome, ScheduleRow, StreakState, TeamGameTotals, Venue,
};
use crate::error::{Result, StatsError};
use crate::storage::{Row, TeamDirectory};
use tracing::warn;

#[cfg(test)]
mod tests;

const OVERTIME_COLUMNS: [&str; 8] = [
    "home_ot1", "away_ot1", "home_ot2", "away_ot2", "home_ot3", "away_ot3", "home_ot4", "away_ot4",
];

/// Win/loss from the team's perspective; `None` when either score is missing.
pub fn classify(result: &GameResult) -> Option<Outcome> {
    let (team, opp) = (result.team_score?, result.opponent_score?);
    Some(if team > opp { Outcome::Win } else { Outcome::Loss })
}

/// True when `games` is non-decreasing by [`GameResult::sort_key`].
pub fn is_chronological(games: &[GameResult]) -> bool {
    games.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key())
}

/// Carried state for the scan.
#[derive(Debug, Default)]
struct StreakTracker {
    seen: u32,
    wins: u32,
    losses: u32,
    previous: Option<Outcome>,
    length: u32,
}

impl StreakTracker {
    fn advance(&mut self, outcome: Option<Outcome>) -> StreakState {
        self.seen += 1;

        let streak = outcome.map(|current| {
            match current {
                Outcome::Win => self.wins += 1,
                Outcome::Loss => self.losses += 1,
            }
            // An unknown previous row always breaks the run.
            if self.previous == Some(current) {
                self.length += 1;
            } else {
                self.length = 1;
            }
            format!("{}{}", current.letter(), self.length)
        });

        if outcome.is_none() {
            self.length = 0;
        }
        self.previous = outcome;

        StreakState {
            g: self.seen,
            wins: self.wins,
            losses: self.losses,
            outcome,
            streak,
        }
    }
}

/// Running wins, losses and streak label for every game, in input order.
pub fn reconstruct_streaks(games: &[GameResult]) -> Vec<StreakState> {
    if !is_chronological(games) {
        warn!(
            games = games.len(),
            "game results are not in chronological order; streaks follow input order"
        );
    }

    let mut tracker = StreakTracker::default();
    games
        .iter()
        .map(|game| tracker.advance(classify(game)))
        .collect()
}

/// Team schedule/results view.
pub fn schedule_view(games: &[GameResult]) -> Vec<ScheduleRow> {
    games
        .iter()
        .zip(reconstruct_streaks(games))
        .map(|(game, state)| ScheduleRow {
            g: state.g,
            game_id: game.game_id.clone(),
            date: game.date.clone(),
            start_et: game.start_time.clone(),
            home_away: game.venue.marker().to_string(),
            opp: game.opponent.clone(),
            wl: state.outcome,
            w: state.wins,
            l: state.losses,
            tm: game.team_score,
            opp_pts: game.opponent_score,
            streak: state.streak,
            ot: if game.overtime { "OT" } else { "" }.to_string(),
        })
        .collect()
}

fn shooting_pct(made: Option<u32>, attempted: Option<u32>) -> Option<f64> {
    clamp_round(safe_div(count(made), count(attempted)), 3)
}

/// Team game log view: the same scan projected onto box-score columns.
pub fn game_log_view(entries: &[GameLogEntry]) -> Vec<GameLogRow> {
    let results: Vec<GameResult> = entries.iter().map(|e| e.result.clone()).collect();

    entries
        .iter()
        .zip(reconstruct_streaks(&results))
        .map(|(entry, state)| {
            let game = &entry.result;
            let box_score = &entry.totals;
            GameLogRow {
                g: state.g,
                game_id: game.game_id.clone(),
                date: game.date.clone(),
                home_away: game.venue.marker().to_string(),
                opp: game.opponent.clone(),
                wl: state.outcome,
                w: state.wins,
                l: state.losses,
                tm: game.team_score,
                opp_pts: game.opponent_score,
                streak: state.streak,
                fg: box_score.field_goals_made,
                fga: box_score.field_goals_attempted,
                fg_pct: shooting_pct(box_score.field_goals_made, box_score.field_goals_attempted),
                threep: box_score.three_pointers_made,
                threep_att: box_score.three_pointers_attempted,
                threep_pct: shooting_pct(
                    box_score.three_pointers_made,
                    box_score.three_pointers_attempted,
                ),
                ft: box_score.free_throws_made,
                fta: box_score.free_throws_attempted,
                ft_pct: shooting_pct(box_score.free_throws_made, box_score.free_throws_attempted),
                orb: box_score.offensive_rebounds,
                drb: box_score.defensive_rebounds,
                tov: box_score.turnovers,
            }
        })
        .collect()
}

/// Decode a row of the games table from `team_id`'s perspective.
///
/// The opponent label comes from `directory`, falling back to the raw id.
pub fn game_result_from_row<D: TeamDirectory + ?Sized>(
    row: &Row,
    team_id: &str,
    directory: &D,
) -> Result<GameResult> {
    let game_id = row.require_str("game_id")?;
    let home_id = row.require_str("home_team_id")?;
    let away_id = row.require_str("away_team_id")?;

    let venue = if home_id == team_id {
        Venue::Home
    } else if away_id == team_id {
        Venue::Away
    } else {
        return Err(StatsError::TeamNotFound {
            team: format!("{} in game {}", team_id, game_id),
        });
    };

    let home_score = row.get_u32("home_team_score")?;
    let away_score = row.get_u32("away_team_score")?;
    let (opponent_id, team_score, opponent_score) = match venue {
        Venue::Home => (away_id, home_score, away_score),
        Venue::Away => (home_id, away_score, home_score),
    };

    let mut overtime = false;
    for column in OVERTIME_COLUMNS {
        if row.get_u32(column)?.is_some() {
            overtime = true;
            break;
        }
    }

    Ok(GameResult {
        date: row.require_str("game_date")?,
        start_time: row.get_str("game_time")?,
        opponent: directory.label_or_id(&opponent_id),
        game_id,
        venue,
        team_score,
        opponent_score,
        overtime,
    })
}

/// Decode a game log row: the game record plus the team's own box totals.
pub fn game_log_entry_from_row<D: TeamDirectory + ?Sized>(
    row: &Row,
    team_id: &str,
    directory: &D,
) -> Result<GameLogEntry> {
    let result = game_result_from_row(row, team_id, directory)?;
    let totals = TeamGameTotals {
        game_id: result.game_id.clone(),
        team_id: team_id.to_string(),
        field_goals_made: row.get_u32("field_goals_made")?,
        field_goals_attempted: row.get_u32("field_goals_attempted")?,
        three_pointers_made: row.get_u32("three_pointers_made")?,
        three_pointers_attempted: row.get_u32("three_pointers_attempted")?,
        free_throws_made: row.get_u32("free_throws_made")?,
        free_throws_attempted: row.get_u32("free_throws_attempted")?,
        offensive_rebounds: row.get_u32("offensive_rebounds")?,
        defensive_rebounds: row.get_u32("defensive_rebounds")?,
        turnovers: row.get_u32("turnovers")?,
        points: row.get_u32("points")?,
    };
    Ok(GameLogEntry { result, totals })
}
