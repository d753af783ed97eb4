//! Row-fetch boundary between the engine and whatever store holds the data.
//!
//! The engine never builds SQL. Callers describe what they need with a
//! [`QuerySpec`], a [`RowSource`] turns that into loosely typed [`Row`]s, and
//! the engine decodes those rows into its own input types.

use crate::error::{Result, StatsError};
use crate::{GameId, SeasonId};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A single nullable scalar as produced by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Mapping from column name to value. Missing columns read as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful when assembling fixtures.
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: impl Into<Value>) {
        self.0.insert(column.to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Nullable float. NaN and infinities read as absent.
    pub fn get_f64(&self, column: &str) -> Result<Option<f64>> {
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Integer(i)) => Ok(Some(*i as f64)),
            Some(Value::Real(f)) => Ok(f.is_finite().then_some(*f)),
            Some(_) => Err(StatsError::InvalidColumnType {
                column: column.to_string(),
                expected: "number",
            }),
        }
    }

    /// Nullable non-negative count. Whole-valued reals are accepted since
    /// aggregated columns often come back as floating point.
    pub fn get_u32(&self, column: &str) -> Result<Option<u32>> {
        let invalid = || StatsError::InvalidColumnType {
            column: column.to_string(),
            expected: "non-negative integer",
        };
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Integer(i)) => u32::try_from(*i).map(Some).map_err(|_| invalid()),
            Some(Value::Real(f)) if f.is_nan() => Ok(None),
            Some(Value::Real(f)) if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 => {
                Ok(Some(*f as u32))
            }
            Some(_) => Err(invalid()),
        }
    }

    /// Nullable text. Numbers are rendered as text since ids are sometimes
    /// stored numerically.
    pub fn get_str(&self, column: &str) -> Result<Option<String>> {
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Text(s)) => Ok(Some(s.clone())),
            Some(Value::Integer(i)) => Ok(Some(i.to_string())),
            Some(_) => Err(StatsError::InvalidColumnType {
                column: column.to_string(),
                expected: "text",
            }),
        }
    }

    /// Nullable flag; SQLite stores booleans as 0/1.
    pub fn get_bool(&self, column: &str) -> Result<Option<bool>> {
        match self.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(Value::Integer(i)) => Ok(Some(*i != 0)),
            Some(_) => Err(StatsError::InvalidColumnType {
                column: column.to_string(),
                expected: "boolean",
            }),
        }
    }

    /// Text column that must be present.
    pub fn require_str(&self, column: &str) -> Result<String> {
        self.get_str(column)?.ok_or_else(|| StatsError::MissingColumn {
            column: column.to_string(),
        })
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The queries the engine's callers know how to ask for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuerySpec {
    /// Both teams' box totals for one game, in storage order.
    TeamGameTotals { game_id: GameId },
    /// Every team box total of a season, ordered by game.
    SeasonTeamGameTotals { season_id: SeasonId },
    /// Dedicated per-period scoring rows for one game.
    LineScores { game_id: GameId },
    /// The general game record, whose period columns back up `LineScores`.
    GameLineColumns { game_id: GameId },
    /// A team's games, ordered by date, start time, game id.
    TeamGames { team_id: String },
    /// A team's games with its own box totals (null when missing), same ordering.
    TeamGameLog { team_id: String },
    /// Season totals joined with team descriptive fields.
    SeasonStandings {
        season_id: SeasonId,
        conference: Option<String>,
    },
}

/// Anything that can answer a [`QuerySpec`] with rows.
pub trait RowSource {
    fn fetch_rows(&self, spec: &QuerySpec) -> Result<Vec<Row>>;
}

/// Team id to display label lookups. Misses are tolerated by every caller.
pub trait TeamDirectory {
    /// Display abbreviation for a team id.
    fn resolve_team_label(&self, team_id: &str) -> Option<String>;

    /// Canonical team id for either a team id or an abbreviation.
    fn resolve_team_id(&self, id_or_abbreviation: &str) -> Option<String>;

    /// Label for `team_id`, falling back to the raw id on a miss.
    fn label_or_id(&self, team_id: &str) -> String {
        self.resolve_team_label(team_id)
            .unwrap_or_else(|| team_id.to_string())
    }
}

impl<T: RowSource + ?Sized> RowSource for &T {
    fn fetch_rows(&self, spec: &QuerySpec) -> Result<Vec<Row>> {
        (**self).fetch_rows(spec)
    }
}

impl<T: TeamDirectory + ?Sized> TeamDirectory for &T {
    fn resolve_team_label(&self, team_id: &str) -> Option<String> {
        (**self).resolve_team_label(team_id)
    }

    fn resolve_team_id(&self, id_or_abbreviation: &str) -> Option<String> {
        (**self).resolve_team_id(id_or_abbreviation)
    }
}

/// Row source backed by pre-materialized rows. Unknown specs yield no rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    rows: HashMap<QuerySpec, Vec<Row>>,
}

impl MemoryRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, spec: QuerySpec, rows: Vec<Row>) {
        self.rows.insert(spec, rows);
    }

    pub fn with(mut self, spec: QuerySpec, rows: Vec<Row>) -> Self {
        self.insert(spec, rows);
        self
    }
}

impl RowSource for MemoryRowSource {
    fn fetch_rows(&self, spec: &QuerySpec) -> Result<Vec<Row>> {
        Ok(self.rows.get(spec).cloned().unwrap_or_default())
    }
}

/// Snapshot of the team directory (team id to abbreviation).
///
/// Unlike a database handle this is `Send + Sync`, so it can be shared across
/// worker threads.
#[derive(Debug, Clone, Default)]
pub struct TeamLabels {
    labels: HashMap<String, String>,
}

impl TeamLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, team_id: impl Into<String>, abbreviation: impl Into<String>) {
        self.labels.insert(team_id.into(), abbreviation.into());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TeamLabels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TeamDirectory for TeamLabels {
    fn resolve_team_label(&self, team_id: &str) -> Option<String> {
        self.labels.get(team_id).cloned()
    }

    fn resolve_team_id(&self, id_or_abbreviation: &str) -> Option<String> {
        if self.labels.contains_key(id_or_abbreviation) {
            return Some(id_or_abbreviation.to_string());
        }
        self.labels
            .iter()
            .find(|(_, abbr)| abbr.eq_ignore_ascii_case(id_or_abbreviation))
            .map(|(id, _)| id.clone())
    }
}
