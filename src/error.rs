//! Error types for the hoops-stats engine and its storage boundary.
//!
//! Missing data is not an error anywhere in the engine: absent inputs flow
//! through as `None`. These variants cover failures at the row-fetch boundary
//! and in the command layer.

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row is missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Column {column} has unexpected type (expected {expected})")]
    InvalidColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("Invalid {kind}: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Team not found: {team}")]
    TeamNotFound { team: String },

    #[error("Database file not found at {path}")]
    DatabaseNotFound { path: String },

    #[error("Database path not provided and {env_var} is not set; no data directory available")]
    MissingDataDir { env_var: String },
}
