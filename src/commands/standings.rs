//! Season standings command.

use super::common::{fmt_count, fmt_opt, print_json, CommandContext};
use crate::{
    engine::{assemble_standings, StandingsItem, StandingsSourceRow},
    storage::{QuerySpec, RowSource},
    Result, SeasonId,
};
use tracing::info;

/// Standings for a season, optionally limited to one conference.
pub fn standings_report<S: RowSource + ?Sized>(
    source: &S,
    season_id: &SeasonId,
    conference: Option<String>,
) -> Result<Vec<StandingsItem>> {
    let rows = source
        .fetch_rows(&QuerySpec::SeasonStandings {
            season_id: season_id.clone(),
            conference,
        })?
        .iter()
        .map(StandingsSourceRow::from_row)
        .collect::<Result<Vec<_>>>()?;
    Ok(assemble_standings(&rows))
}

/// Handle the standings command
pub fn handle_standings(
    ctx: &CommandContext,
    season_id: &SeasonId,
    conference: Option<String>,
    as_json: bool,
) -> anyhow::Result<()> {
    let items = standings_report(&ctx.db, season_id, conference)?;
    info!(teams = items.len(), season = %season_id, "standings assembled");

    if as_json {
        return print_json(&items);
    }
    if items.is_empty() {
        println!("No standings found for season {}", season_id);
        return Ok(());
    }

    println!(
        "{:<5} {:>3} {:>3} {:>6} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>5} {:>5}",
        "Team", "W", "L", "W/L%", "GB", "PS/G", "PA/G", "ORtg", "DRtg", "NRtg", "PW", "PL"
    );
    for item in &items {
        println!(
            "{:<5} {:>3} {:>3} {:>6} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>5} {:>5}",
            item.team.as_deref().unwrap_or(&item.team_id),
            fmt_count(item.wins),
            fmt_count(item.losses),
            fmt_opt(item.win_pct, 3),
            fmt_opt(item.games_behind, 1),
            fmt_opt(item.points_per_game, 1),
            fmt_opt(item.opponent_points_per_game, 1),
            fmt_opt(item.offensive_rating, 1),
            fmt_opt(item.defensive_rating, 1),
            fmt_opt(item.net_rating, 1),
            fmt_opt(item.pw, 1),
            fmt_opt(item.pl, 1),
        );
    }
    Ok(())
}
