//! Basketball derived-statistics library
//!
//! Computes advanced metrics from box-score and game rows held in a local
//! SQLite database: possessions and pace, the four factors, offensive and
//! defensive rating, pythagorean expected record, running win/loss streaks,
//! per-period line scores, and season standings.
//!
//! ## Layout
//!
//! - [`engine`]: pure calculators. Missing inputs become `None`, never errors
//!   or panics.
//! - [`storage`]: the row-fetch boundary ([`storage::RowSource`],
//!   [`storage::TeamDirectory`]) and its SQLite implementation.
//! - [`commands`]: report builders and CLI handlers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoops_stats::{commands::game_data::four_factors_report, storage::StatsDatabase, GameId};
//! use std::path::Path;
//!
//! # fn example() -> hoops_stats::Result<()> {
//! let db = StatsDatabase::open(Path::new("nba.db"))?;
//! for team in four_factors_report(&db, &db, &GameId::new("0022300001"))? {
//!     println!("{} eFG% {:?}", team.team, team.effective_fg_pct);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database path to avoid passing `--db` in every command:
//! ```bash
//! export HOOPS_STATS_DB=~/data/nba.db
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, SeasonId, TeamId};
pub use error::{Result, StatsError};

/// Environment variable holding the database path.
pub const DB_PATH_ENV_VAR: &str = "HOOPS_STATS_DB";
