//! Per-team commands: schedule/results and game log.

use super::common::{fmt_count, fmt_opt, print_json, CommandContext};
use crate::{
    engine::{
        game_log_view, schedule_view,
        streaks::{game_log_entry_from_row, game_result_from_row},
        GameLogRow, ScheduleRow,
    },
    error::StatsError,
    storage::{QuerySpec, RowSource, TeamDirectory},
    Result, TeamId,
};
use tracing::debug;

/// Canonical team id for a user-supplied id or abbreviation.
fn resolve_team<D: TeamDirectory + ?Sized>(directory: &D, team: &TeamId) -> Result<String> {
    let resolved = directory
        .resolve_team_id(team.as_str())
        .ok_or_else(|| StatsError::TeamNotFound {
            team: team.to_string(),
        })?;
    debug!(requested = %team, team_id = %resolved, "resolved team");
    Ok(resolved)
}

/// Schedule rows with running record and streak, oldest game first.
pub fn schedule_report<S, D>(source: &S, directory: &D, team: &TeamId) -> Result<Vec<ScheduleRow>>
where
    S: RowSource + ?Sized,
    D: TeamDirectory + ?Sized,
{
    let team_id = resolve_team(directory, team)?;
    let games = source
        .fetch_rows(&QuerySpec::TeamGames {
            team_id: team_id.clone(),
        })?
        .iter()
        .map(|row| game_result_from_row(row, &team_id, directory))
        .collect::<Result<Vec<_>>>()?;
    Ok(schedule_view(&games))
}

/// Game log rows: schedule columns plus the team's own shooting and rebounding.
pub fn game_log_report<S, D>(source: &S, directory: &D, team: &TeamId) -> Result<Vec<GameLogRow>>
where
    S: RowSource + ?Sized,
    D: TeamDirectory + ?Sized,
{
    let team_id = resolve_team(directory, team)?;
    let entries = source
        .fetch_rows(&QuerySpec::TeamGameLog {
            team_id: team_id.clone(),
        })?
        .iter()
        .map(|row| game_log_entry_from_row(row, &team_id, directory))
        .collect::<Result<Vec<_>>>()?;
    Ok(game_log_view(&entries))
}

/// Handle the schedule command
pub fn handle_schedule(ctx: &CommandContext, team: &TeamId, as_json: bool) -> anyhow::Result<()> {
    let rows = schedule_report(&ctx.db, &ctx.db, team)?;

    if as_json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No games found for {}", team);
        return Ok(());
    }

    println!(
        "{:>3} {:<10} {:<8} {:<1} {:<5} {:<1} {:>4} {:>4} {:>3} {:>3} {:<6} {:<2}",
        "G", "Date", "Start", "", "Opp", "", "Tm", "Opp", "W", "L", "Strk", ""
    );
    for row in &rows {
        println!(
            "{:>3} {:<10} {:<8} {:<1} {:<5} {:<1} {:>4} {:>4} {:>3} {:>3} {:<6} {:<2}",
            row.g,
            row.date,
            row.start_et.as_deref().unwrap_or(""),
            row.home_away,
            row.opp,
            row.wl.map(|o| o.letter()).unwrap_or(' '),
            fmt_count(row.tm),
            fmt_count(row.opp_pts),
            row.w,
            row.l,
            row.streak.as_deref().unwrap_or(""),
            row.ot,
        );
    }
    Ok(())
}

/// Handle the game log command
pub fn handle_game_log(ctx: &CommandContext, team: &TeamId, as_json: bool) -> anyhow::Result<()> {
    let rows = game_log_report(&ctx.db, &ctx.db, team)?;

    if as_json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No game log found for {}", team);
        return Ok(());
    }

    println!(
        "{:>3} {:<10} {:<1} {:<5} {:<1} {:>4} {:>4} {:<5} {:>3} {:>3} {:>5} {:>3} {:>3} {:>5} {:>3} {:>3} {:>5} {:>3} {:>3} {:>3}",
        "G", "Date", "", "Opp", "", "Tm", "Opp", "Strk", "FG", "FGA", "FG%", "3P", "3PA", "3P%",
        "FT", "FTA", "FT%", "ORB", "DRB", "TOV"
    );
    for row in &rows {
        println!(
            "{:>3} {:<10} {:<1} {:<5} {:<1} {:>4} {:>4} {:<5} {:>3} {:>3} {:>5} {:>3} {:>3} {:>5} {:>3} {:>3} {:>5} {:>3} {:>3} {:>3}",
            row.g,
            row.date,
            row.home_away,
            row.opp,
            row.wl.map(|o| o.letter()).unwrap_or(' '),
            fmt_count(row.tm),
            fmt_count(row.opp_pts),
            row.streak.as_deref().unwrap_or(""),
            fmt_count(row.fg),
            fmt_count(row.fga),
            fmt_opt(row.fg_pct, 3),
            fmt_count(row.threep),
            fmt_count(row.threep_att),
            fmt_opt(row.threep_pct, 3),
            fmt_count(row.ft),
            fmt_count(row.fta),
            fmt_opt(row.ft_pct, 3),
            fmt_count(row.orb),
            fmt_count(row.drb),
            fmt_count(row.tov),
        );
    }
    Ok(())
}
