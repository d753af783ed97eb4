//! Command implementations for the hoops-stats CLI
//!
//! Each command has a `*_report` builder that fetches rows through the
//! row-fetch boundary and runs the engine, and a `handle_*` wrapper that
//! prints the result as text or JSON.

pub mod common;
pub mod game_data;
pub mod standings;
pub mod team_data;


use crate::{error::StatsError, Result, DB_PATH_ENV_VAR};
use std::path::PathBuf;

/// File name of the default database under the data directory.
pub const DEFAULT_DB_FILE: &str = "nba.db";

/// Database path from the CLI flag, else the `HOOPS_STATS_DB` environment
/// variable, else `<data dir>/hoops-stats/nba.db`.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_path {
        return Ok(path);
    }

    if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    dirs::data_dir()
        .map(|dir| dir.join("hoops-stats").join(DEFAULT_DB_FILE))
        .ok_or_else(|| StatsError::MissingDataDir {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })
}
