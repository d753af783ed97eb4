//! Pythagorean win expectation with the basketball exponent.

use super::safe_math::{clamp_round, finite};
use super::types::PythagoreanRecord;


/// Exponent fitted for basketball scoring (Morey's 13.91 and Hollinger's
/// 16.5 are both common; this engine uses 16.5).
pub const PYTHAGOREAN_EXPONENT: f64 = 16.5;

/// Expected wins/losses from points per game, opponent points per game, and
/// games played.
///
/// Both fields are `None` if any input is missing, `games_played` is zero, or
/// the denominator vanishes. `pw` is rounded to one decimal and `pl` is taken
/// from the rounded `pw`, so `pw + pl == games_played` up to float noise.
pub fn pythagorean_record(
    points: Option<f64>,
    opponent_points: Option<f64>,
    games_played: Option<u32>,
) -> PythagoreanRecord {
    expected_wins(points, opponent_points, games_played)
        .map(|pw| {
            let games = games_played.map(f64::from);
            let pl = games.map(|g| g - pw);
            PythagoreanRecord {
                pw: Some(pw),
                pl: clamp_round(pl, 1),
            }
        })
        .unwrap_or_default()
}

fn expected_wins(
    points: Option<f64>,
    opponent_points: Option<f64>,
    games_played: Option<u32>,
) -> Option<f64> {
    let games = f64::from(games_played.filter(|&g| g > 0)?);
    let pts = finite(points)?;
    let opp = finite(opponent_points)?;

    let share = if pts > 0.0 {
        // Ratio form stays finite for extreme inputs.
        1.0 / (1.0 + (opp / pts).powf(PYTHAGOREAN_EXPONENT))
    } else {
        let pts_e = pts.powf(PYTHAGOREAN_EXPONENT);
        let denominator = pts_e + opp.powf(PYTHAGOREAN_EXPONENT);
        if denominator == 0.0 {
            return None;
        }
        pts_e / denominator
    };

    clamp_round(finite(Some(games * share)), 1)
}
