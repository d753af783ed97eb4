//! Common utilities shared across commands.

use super::resolve_db_path;
use crate::storage::StatsDatabase;
use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Resources every command needs: the database handle.
///
/// Created once at startup; dropping it closes the connection.
pub struct CommandContext {
    pub db: StatsDatabase,
}

impl CommandContext {
    /// Resolve the database path and open it read-only.
    pub fn new(db_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let path = resolve_db_path(db_path)?;
        info!(path = %path.display(), "connecting to database");

        let db = StatsDatabase::open(&path)
            .with_context(|| format!("failed to open stats database at {}", path.display()))?;
        Ok(Self { db })
    }

    /// Wrap an already-open database.
    pub fn from_database(db: StatsDatabase) -> Self {
        Self { db }
    }
}

impl Drop for CommandContext {
    fn drop(&mut self) {
        debug!("closing database connection");
    }
}

/// Print records as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Nullable float for text output; absent values print as `-`.
pub fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_else(|| "-".to_string())
}

/// Nullable count for text output.
pub fn fmt_count(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}
