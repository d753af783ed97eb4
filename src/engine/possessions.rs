//! Possession estimate from box totals.
//!
//! ```text
//! possessions = FGA + 0.4 * FTA - 1.07 * orb_factor * (FGA - FGM) + TOV
//! orb_factor  = OREB / (OREB + opponent DREB)
//! ```

use super::safe_math::{count, finite};
use super::types::TeamGameTotals;
use tracing::warn;


/// Weight of a free-throw attempt in possession terms.
pub const FREE_THROW_WEIGHT: f64 = 0.4;

/// Weight of the offensive-rebound correction on missed field goals.
pub const OFFENSIVE_REBOUND_WEIGHT: f64 = 1.07;

/// Share of available offensive rebounds the team collected.
///
/// A missing opponent or missing opponent DREB contributes zero to the
/// denominator; a zero denominator yields `0.0` rather than `None`.
pub fn offensive_rebound_factor(
    team: &TeamGameTotals,
    opponent: Option<&TeamGameTotals>,
) -> Option<f64> {
    let oreb = team.offensive_rebounds;
    let opp_dreb = opponent.and_then(|o| o.defensive_rebounds);
    if oreb.is_none() && opp_dreb.is_none() {
        return None;
    }

    let oreb = f64::from(oreb.unwrap_or(0));
    let denominator = oreb + f64::from(opp_dreb.unwrap_or(0));
    if denominator == 0.0 {
        Some(0.0)
    } else {
        Some(oreb / denominator)
    }
}

/// Estimate one team's possessions for a game.
///
/// Returns `None` when FGA, FTA, OREB, TOV or FGM is missing. Negative
/// estimates (only reachable with inconsistent totals such as FGM > FGA) are
/// passed through unclamped.
pub fn estimate_possessions(
    team: &TeamGameTotals,
    opponent: Option<&TeamGameTotals>,
) -> Option<f64> {
    let fga = count(team.field_goals_attempted)?;
    let fta = count(team.free_throws_attempted)?;
    let fgm = count(team.field_goals_made)?;
    let tov = count(team.turnovers)?;
    team.offensive_rebounds?;
    let orb_factor = offensive_rebound_factor(team, opponent)?;

    let possessions = fga + FREE_THROW_WEIGHT * fta
        - OFFENSIVE_REBOUND_WEIGHT * orb_factor * (fga - fgm)
        + tov;

    if possessions < 0.0 {
        warn!(
            game_id = %team.game_id,
            team_id = %team.team_id,
            possessions,
            "negative possession estimate; box totals look inconsistent"
        );
    }

    finite(Some(possessions))
}
