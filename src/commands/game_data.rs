//! Per-game commands: four factors, line score, and season-wide four factors.

use super::common::{fmt_count, fmt_opt, print_json, CommandContext};
use crate::{
    engine::{
        four_factors_for_game, resolve_line_score, season_four_factors, FourFactors,
        GameFourFactors, LineScore, TeamGameTotals,
    },
    storage::{QuerySpec, RowSource, TeamDirectory, TeamLabels},
    GameId, Result, SeasonId,
};
use tracing::info;

fn fetch_team_totals<S: RowSource + ?Sized>(
    source: &S,
    spec: &QuerySpec,
) -> Result<Vec<TeamGameTotals>> {
    source
        .fetch_rows(spec)?
        .iter()
        .map(TeamGameTotals::from_row)
        .collect()
}

/// Four factors for both teams of one game.
pub fn four_factors_report<S, D>(source: &S, directory: &D, game_id: &GameId) -> Result<Vec<FourFactors>>
where
    S: RowSource + ?Sized,
    D: TeamDirectory + ?Sized,
{
    let totals = fetch_team_totals(
        source,
        &QuerySpec::TeamGameTotals {
            game_id: game_id.clone(),
        },
    )?;
    Ok(four_factors_for_game(&totals, directory))
}

/// Line score for one game (zero or two rows).
pub fn line_score_report<S, D>(source: &S, directory: &D, game_id: &GameId) -> Result<Vec<LineScore>>
where
    S: RowSource + ?Sized,
    D: TeamDirectory + ?Sized,
{
    resolve_line_score(source, directory, game_id)
}

/// Four factors for every game in a season.
pub fn season_factors_report<S: RowSource + ?Sized>(
    source: &S,
    labels: &TeamLabels,
    season_id: &SeasonId,
) -> Result<Vec<GameFourFactors>> {
    let totals = fetch_team_totals(
        source,
        &QuerySpec::SeasonTeamGameTotals {
            season_id: season_id.clone(),
        },
    )?;
    Ok(season_four_factors(totals, labels))
}

fn print_four_factors_header() {
    println!(
        "{:<6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "Team", "Poss", "Pace", "eFG%", "TOV%", "ORB%", "FT/FGA", "ORtg", "DRtg"
    );
}

fn print_four_factors_line(ff: &FourFactors) {
    println!(
        "{:<6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        ff.team,
        fmt_opt(ff.possessions, 1),
        fmt_opt(ff.pace, 1),
        fmt_opt(ff.effective_fg_pct, 3),
        fmt_opt(ff.turnover_pct, 1),
        fmt_opt(ff.offensive_rebound_pct, 3),
        fmt_opt(ff.free_throw_rate, 3),
        fmt_opt(ff.offensive_rating, 1),
        fmt_opt(ff.defensive_rating, 1),
    );
}

/// Handle the four factors command
pub fn handle_four_factors(ctx: &CommandContext, game_id: &GameId, as_json: bool) -> anyhow::Result<()> {
    let records = four_factors_report(&ctx.db, &ctx.db, game_id)?;

    if as_json {
        return print_json(&records);
    }
    if records.is_empty() {
        println!("No team totals found for game {}", game_id);
        return Ok(());
    }

    print_four_factors_header();
    for ff in &records {
        print_four_factors_line(ff);
    }
    Ok(())
}

/// Handle the line score command
pub fn handle_line_score(ctx: &CommandContext, game_id: &GameId, as_json: bool) -> anyhow::Result<()> {
    let lines = line_score_report(&ctx.db, &ctx.db, game_id)?;

    if as_json {
        return print_json(&lines);
    }
    if lines.is_empty() {
        println!("No line score available for game {}", game_id);
        return Ok(());
    }

    let show_ot = lines
        .iter()
        .any(|l| l.ot1.or(l.ot2).or(l.ot3).or(l.ot4).is_some());
    for line in &lines {
        let mut periods = vec![line.q1, line.q2, line.q3, line.q4];
        if show_ot {
            periods.extend([line.ot1, line.ot2, line.ot3, line.ot4]);
        }
        let cells: Vec<String> = periods.into_iter().map(fmt_count).map(|c| format!("{:>4}", c)).collect();
        println!(
            "{:<5}{}  {:>4}",
            line.team,
            cells.join(""),
            fmt_count(line.total)
        );
    }
    Ok(())
}

/// Handle the season four factors command
pub fn handle_season_factors(ctx: &CommandContext, season_id: &SeasonId, as_json: bool) -> anyhow::Result<()> {
    let labels = ctx.db.team_labels()?;
    let games = season_factors_report(&ctx.db, &labels, season_id)?;
    info!(games = games.len(), season = %season_id, "season four factors computed");

    if as_json {
        return print_json(&games);
    }
    if games.is_empty() {
        println!("No games found for season {}", season_id);
        return Ok(());
    }

    for game in &games {
        println!("Game {}", game.game_id);
        print_four_factors_header();
        for ff in &game.teams {
            print_four_factors_line(ff);
        }
        println!();
    }
    Ok(())
}
