//! Derived-statistics engine.
//!
//! Pure calculators over already-fetched rows:
//! - `safe_math`: null-propagating arithmetic
//! - `possessions`: possession estimate
//! - `four_factors`: pace, four factors, ratings
//! - `pythagorean`: expected wins/losses
//! - `streaks`: running record and streak labels (schedule and game log views)
//! - `line_score`: per-period scoring with source fallback
//! - `standings`: standings rows
//!
//! Nothing here holds state between calls, so every function is safe to call
//! from several threads at once.

pub mod four_factors;
pub mod line_score;
pub mod possessions;
pub mod pythagorean;
pub mod safe_math;
pub mod standings;
pub mod streaks;
pub mod types;

pub use four_factors::{compute_four_factors, four_factors_for_game, season_four_factors};
pub use line_score::resolve_line_score;
pub use possessions::estimate_possessions;
pub use pythagorean::pythagorean_record;
pub use standings::assemble_standings;
pub use streaks::{game_log_view, reconstruct_streaks, schedule_view};
pub use types::*;
