//! Type-safe identifiers shared by the CLI, storage, and engine.

pub mod ids;

pub use ids::{GameId, SeasonId, TeamId};
