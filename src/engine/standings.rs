//! Standings rows: season totals plus team fields plus pythagorean record.

use super::pythagorean::pythagorean_record;
use super::safe_math::{clamp_round, finite, opt_sub};
use super::types::{StandingsItem, StandingsSourceRow};
use std::cmp::Ordering;
use std::collections::HashMap;


/// Stored games played, else wins + losses (`None` on overflow).
pub fn games_played(row: &StandingsSourceRow) -> Option<u32> {
    let totals = &row.totals;
    totals
        .games_played
        .or_else(|| totals.wins?.checked_add(totals.losses?))
}

fn win_pct(row: &StandingsSourceRow, games: Option<u32>) -> Option<f64> {
    finite(row.totals.win_pct).or_else(|| {
        let wins = f64::from(row.totals.wins?);
        match games? {
            0 => Some(0.0),
            g => clamp_round(Some(wins / f64::from(g)), 3),
        }
    })
}

fn assemble_one(row: &StandingsSourceRow) -> StandingsItem {
    let totals = &row.totals;
    let games = games_played(row);
    let ppg = finite(totals.points_per_game);
    let opp_ppg = finite(totals.opponent_points_per_game);
    let ortg = finite(totals.offensive_rating);
    let drtg = finite(totals.defensive_rating);
    let pct = win_pct(row, games);
    let games_behind = finite(totals.games_behind);
    let record = pythagorean_record(ppg, opp_ppg, games);

    StandingsItem {
        team_id: totals.team_id.clone(),
        full_name: row.team.full_name.clone(),
        abbreviation: row.team.abbreviation.clone(),
        team: row.team.abbreviation.clone(),
        logo_url: row.team.logo_url.clone(),
        conference: row.team.conference.clone(),
        division: row.team.division.clone(),
        wins: totals.wins,
        losses: totals.losses,
        games_played: games,
        win_pct: pct,
        wl_pct: pct,
        games_behind,
        gb: games_behind,
        points_per_game: ppg,
        opponent_points_per_game: opp_ppg,
        ps_g: ppg,
        pa_g: opp_ppg,
        simple_rating_system: finite(totals.simple_rating_system),
        pace: finite(totals.pace),
        offensive_rating: ortg,
        defensive_rating: drtg,
        net_rating: finite(totals.net_rating)
            .or_else(|| clamp_round(opt_sub(ortg, drtg), 1)),
        pw: record.pw,
        pl: record.pl,
    }
}

/// Games behind `leader`: `((lead_w - w) + (l - lead_l)) / 2`.
pub fn games_behind(leader: (u32, u32), record: (u32, u32)) -> f64 {
    let (lead_w, lead_l) = (f64::from(leader.0), f64::from(leader.1));
    let (w, l) = (f64::from(record.0), f64::from(record.1));
    ((lead_w - w) + (l - lead_l)) / 2.0
}

/// Fill missing games-behind values against each conference's leader.
fn fill_games_behind(items: &mut [StandingsItem]) {
    let mut leaders: HashMap<Option<String>, (u32, u32)> = HashMap::new();
    for item in items.iter() {
        let (Some(w), Some(l)) = (item.wins, item.losses) else {
            continue;
        };
        leaders
            .entry(item.conference.clone())
            .and_modify(|lead| {
                if games_behind(*lead, (w, l)) < 0.0 {
                    *lead = (w, l);
                }
            })
            .or_insert((w, l));
    }

    for item in items.iter_mut() {
        if item.games_behind.is_some() {
            continue;
        }
        let (Some(w), Some(l)) = (item.wins, item.losses) else {
            continue;
        };
        if let Some(leader) = leaders.get(&item.conference) {
            let gb = games_behind(*leader, (w, l));
            item.games_behind = Some(gb);
            item.gb = Some(gb);
        }
    }
}

fn standings_order(a: &StandingsItem, b: &StandingsItem) -> Ordering {
    let pct = |item: &StandingsItem| item.win_pct.unwrap_or(f64::NEG_INFINITY);
    pct(b)
        .partial_cmp(&pct(a))
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| a.abbreviation.cmp(&b.abbreviation))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Build standings rows, best record first.
pub fn assemble_standings(rows: &[StandingsSourceRow]) -> Vec<StandingsItem> {
    let mut items: Vec<StandingsItem> = rows.iter().map(assemble_one).collect();
    fill_games_behind(&mut items);
    items.sort_by(standings_order);
    items
}
