//! Storage layer: the row-fetch boundary and its SQLite implementation.
//!
//! - `row`: row/value types, query specs, and the `RowSource` / `TeamDirectory`
//!   traits, plus in-memory implementations
//! - `schema`: database connection and schema management
//! - `queries`: SQL for each query spec and directory lookups

pub mod queries;
pub mod row;
pub mod schema;


pub use row::{MemoryRowSource, QuerySpec, Row, RowSource, TeamDirectory, TeamLabels, Value};
pub use schema::StatsDatabase;
