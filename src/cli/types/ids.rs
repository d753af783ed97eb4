//! ID types for games, teams, and seasons.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

fn parse_identifier(kind: &'static str, s: &str) -> Result<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(StatsError::InvalidIdentifier {
            kind,
            value: s.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Type-safe wrapper for game identifiers.
///
/// Game ids are opaque strings (for example `0022300061`); leading zeros are
/// significant, so they are never parsed as numbers.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::GameId;
///
/// let game_id: GameId = "0022300061".parse().unwrap();
/// assert_eq!(game_id.as_str(), "0022300061");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(parse_identifier("game id", s)?))
    }
}

/// Type-safe wrapper for a team id or abbreviation as typed by the user.
///
/// The storage layer resolves it to a canonical team id before querying.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(parse_identifier("team id", s)?))
    }
}

/// Type-safe wrapper for season identifiers (e.g. `2023-24`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonId(pub String);

impl SeasonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(parse_identifier("season id", s)?))
    }
}
