//! Pace, the four factors, and offensive/defensive rating for one game.
//!
//! Ratio fields (`effective_fg_pct`, `offensive_rebound_pct`,
//! `free_throw_rate`) are fractions in [0, 1]. `turnover_pct` and the ratings
//! are per 100 possessions.

use super::possessions::estimate_possessions;
use super::safe_math::{clamp_round, count, opt_add, opt_mul, safe_div};
use super::types::{FourFactors, GameFourFactors, TeamGameTotals};
use crate::storage::TeamDirectory;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, warn};


const RATE_DECIMALS: u32 = 1;
const RATIO_DECIMALS: u32 = 3;

/// Compute one team's record against `opponent` (which may be absent).
pub fn compute_four_factors(
    team: &TeamGameTotals,
    opponent: Option<&TeamGameTotals>,
    label: String,
) -> FourFactors {
    let team_poss = estimate_possessions(team, opponent);
    let opp_poss = opponent.and_then(|o| estimate_possessions(o, Some(team)));

    let fgm = count(team.field_goals_made);
    let fga = count(team.field_goals_attempted);
    let oreb = count(team.offensive_rebounds);
    let opp_dreb = count(opponent.and_then(|o| o.defensive_rebounds));

    let pace = opt_add(team_poss, opp_poss).map(|total| total / 2.0);
    let effective_fg_pct = safe_div(
        opt_add(fgm, count(team.three_pointers_made).map(|m| 0.5 * m)),
        fga,
    );
    let turnover_pct = opt_mul(safe_div(count(team.turnovers), team_poss), 100.0);
    let offensive_rebound_pct = safe_div(oreb, opt_add(oreb, opp_dreb));
    let free_throw_rate = safe_div(count(team.free_throws_made), fga);
    let offensive_rating = opt_mul(safe_div(count(team.points), team_poss), 100.0);
    let defensive_rating = opt_mul(
        safe_div(count(opponent.and_then(|o| o.points)), opp_poss),
        100.0,
    );

    FourFactors {
        team: label,
        possessions: clamp_round(team_poss, RATE_DECIMALS),
        pace: clamp_round(pace, RATE_DECIMALS),
        effective_fg_pct: clamp_round(effective_fg_pct, RATIO_DECIMALS),
        turnover_pct: clamp_round(turnover_pct, RATE_DECIMALS),
        offensive_rebound_pct: clamp_round(offensive_rebound_pct, RATIO_DECIMALS),
        free_throw_rate: clamp_round(free_throw_rate, RATIO_DECIMALS),
        offensive_rating: clamp_round(offensive_rating, RATE_DECIMALS),
        defensive_rating: clamp_round(defensive_rating, RATE_DECIMALS),
    }
}

/// Four factors for every team row of one game, in input order.
///
/// Two rows give two records (first team, then its opponent). A single row is
/// computed against an absent opponent. Team labels come from `directory`,
/// falling back to the raw team id.
pub fn four_factors_for_game<D: TeamDirectory + ?Sized>(
    totals: &[TeamGameTotals],
    directory: &D,
) -> Vec<FourFactors> {
    match totals {
        [] => Vec::new(),
        [only] => vec![compute_four_factors(
            only,
            None,
            directory.label_or_id(&only.team_id),
        )],
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                warn!(
                    game_id = %first.game_id,
                    rows = totals.len(),
                    "more than two team rows for one game; using the first two"
                );
            }
            vec![
                compute_four_factors(first, Some(second), directory.label_or_id(&first.team_id)),
                compute_four_factors(second, Some(first), directory.label_or_id(&second.team_id)),
            ]
        }
    }
}

/// Group team rows by game, keeping first-seen game order.
pub fn group_by_game(totals: Vec<TeamGameTotals>) -> Vec<(String, Vec<TeamGameTotals>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<TeamGameTotals>)> = Vec::new();

    for row in totals {
        match index.get(&row.game_id) {
            Some(&i) => groups[i].1.push(row),
            None => {
                index.insert(row.game_id.clone(), groups.len());
                groups.push((row.game_id.clone(), vec![row]));
            }
        }
    }
    groups
}

/// Four factors for every game of a season, computed in parallel.
pub fn season_four_factors<D: TeamDirectory + Sync + ?Sized>(
    totals: Vec<TeamGameTotals>,
    directory: &D,
) -> Vec<GameFourFactors> {
    let groups = group_by_game(totals);
    debug!(games = groups.len(), "computing season four factors");

    groups
        .par_iter()
        .map(|(game_id, rows)| GameFourFactors {
            game_id: game_id.clone(),
            teams: four_factors_for_game(rows, directory),
        })
        .collect()
}
