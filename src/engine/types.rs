//! Input rows and computed records for the derived-statistics engine.
//!
//! Input types are decoded from storage [`Row`]s; output types are plain
//! serializable records with nullable fields.

use crate::error::Result;
use crate::storage::Row;
use serde::{Deserialize, Serialize};

/// One team's box totals for one game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamGameTotals {
    pub game_id: String,
    pub team_id: String,
    pub field_goals_made: Option<u32>,
    pub field_goals_attempted: Option<u32>,
    pub three_pointers_made: Option<u32>,
    pub three_pointers_attempted: Option<u32>,
    pub free_throws_made: Option<u32>,
    pub free_throws_attempted: Option<u32>,
    pub offensive_rebounds: Option<u32>,
    pub defensive_rebounds: Option<u32>,
    pub turnovers: Option<u32>,
    pub points: Option<u32>,
}

impl TeamGameTotals {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            game_id: row.require_str("game_id")?,
            team_id: row.require_str("team_id")?,
            field_goals_made: row.get_u32("field_goals_made")?,
            field_goals_attempted: row.get_u32("field_goals_attempted")?,
            three_pointers_made: row.get_u32("three_pointers_made")?,
            three_pointers_attempted: row.get_u32("three_pointers_attempted")?,
            free_throws_made: row.get_u32("free_throws_made")?,
            free_throws_attempted: row.get_u32("free_throws_attempted")?,
            offensive_rebounds: row.get_u32("offensive_rebounds")?,
            defensive_rebounds: row.get_u32("defensive_rebounds")?,
            turnovers: row.get_u32("turnovers")?,
            points: row.get_u32("points")?,
        })
    }
}

/// Which side of the court a game was played from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    /// Box-score marker: empty for home games, `@` for road games.
    pub fn marker(&self) -> &'static str {
        match self {
            Venue::Home => "",
            Venue::Away => "@",
        }
    }
}

/// One game from a single team's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_id: String,
    /// ISO `YYYY-MM-DD`, so lexicographic order is chronological.
    pub date: String,
    pub start_time: Option<String>,
    pub venue: Venue,
    pub opponent: String,
    pub team_score: Option<u32>,
    pub opponent_score: Option<u32>,
    pub overtime: bool,
}

impl GameResult {
    /// Ordering key the reconstructor expects its input to be sorted by.
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (
            self.date.as_str(),
            self.start_time.as_deref().unwrap_or(""),
            self.game_id.as_str(),
        )
    }
}

/// A game result together with the team's own box totals.
#[derive(Debug, Clone, PartialEq)]
pub struct GameLogEntry {
    pub result: GameResult,
    pub totals: TeamGameTotals,
}

/// Won or lost. Basketball has no ties; equal scores count as a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn letter(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Loss => 'L',
        }
    }
}

/// Raw per-period scoring for one team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSourceRow {
    pub team: String,
    pub is_home: bool,
    pub quarters: [Option<u32>; 4],
    pub overtimes: [Option<u32>; 4],
    pub total: Option<u32>,
}

impl LineSourceRow {
    /// True when no period and no total is known.
    pub fn is_empty(&self) -> bool {
        self.total.is_none()
            && self.quarters.iter().all(Option::is_none)
            && self.overtimes.iter().all(Option::is_none)
    }
}

/// Team descriptive fields joined onto standings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub full_name: Option<String>,
    pub abbreviation: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub logo_url: Option<String>,
}

/// One team's season aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonTotals {
    pub team_id: String,
    pub season_id: String,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub win_pct: Option<f64>,
    pub games_played: Option<u32>,
    pub points_per_game: Option<f64>,
    pub opponent_points_per_game: Option<f64>,
    pub games_behind: Option<f64>,
    pub pace: Option<f64>,
    pub offensive_rating: Option<f64>,
    pub defensive_rating: Option<f64>,
    pub net_rating: Option<f64>,
    pub simple_rating_system: Option<f64>,
}

/// Season totals already joined with the team directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandingsSourceRow {
    pub totals: SeasonTotals,
    pub team: TeamInfo,
}

impl StandingsSourceRow {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            totals: SeasonTotals {
                team_id: row.require_str("team_id")?,
                season_id: row.require_str("season_id")?,
                wins: row.get_u32("wins")?,
                losses: row.get_u32("losses")?,
                win_pct: row.get_f64("win_pct")?,
                games_played: row.get_u32("games_played")?,
                points_per_game: row.get_f64("points_per_game")?,
                opponent_points_per_game: row.get_f64("opponent_points_per_game")?,
                games_behind: row.get_f64("games_behind")?,
                pace: row.get_f64("pace")?,
                offensive_rating: row.get_f64("offensive_rating")?,
                defensive_rating: row.get_f64("defensive_rating")?,
                net_rating: row.get_f64("net_rating")?,
                simple_rating_system: row.get_f64("simple_rating_system")?,
            },
            team: TeamInfo {
                full_name: row.get_str("full_name")?,
                abbreviation: row.get_str("abbreviation")?,
                conference: row.get_str("conference")?,
                division: row.get_str("division")?,
                logo_url: row.get_str("logo_url")?,
            },
        })
    }
}

/// Advanced per-game metrics for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourFactors {
    pub team: String,
    pub possessions: Option<f64>,
    pub pace: Option<f64>,
    pub effective_fg_pct: Option<f64>,
    pub turnover_pct: Option<f64>,
    pub offensive_rebound_pct: Option<f64>,
    pub free_throw_rate: Option<f64>,
    pub offensive_rating: Option<f64>,
    pub defensive_rating: Option<f64>,
}

/// Four factors for both teams of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameFourFactors {
    pub game_id: String,
    pub teams: Vec<FourFactors>,
}

/// Expected wins and losses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PythagoreanRecord {
    pub pw: Option<f64>,
    pub pl: Option<f64>,
}

/// Running record at one row of a team's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakState {
    /// 1-based position in the scanned sequence.
    pub g: u32,
    pub wins: u32,
    pub losses: u32,
    pub outcome: Option<Outcome>,
    pub streak: Option<String>,
}

/// Team schedule/results row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub g: u32,
    pub game_id: String,
    pub date: String,
    pub start_et: Option<String>,
    pub home_away: String,
    pub opp: String,
    pub wl: Option<Outcome>,
    pub w: u32,
    pub l: u32,
    pub tm: Option<u32>,
    pub opp_pts: Option<u32>,
    pub streak: Option<String>,
    pub ot: String,
}

/// Team game log row: the schedule projection plus the team's box totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRow {
    pub g: u32,
    pub game_id: String,
    pub date: String,
    pub home_away: String,
    pub opp: String,
    pub wl: Option<Outcome>,
    pub w: u32,
    pub l: u32,
    pub tm: Option<u32>,
    pub opp_pts: Option<u32>,
    pub streak: Option<String>,
    pub fg: Option<u32>,
    pub fga: Option<u32>,
    pub fg_pct: Option<f64>,
    pub threep: Option<u32>,
    pub threep_att: Option<u32>,
    pub threep_pct: Option<f64>,
    pub ft: Option<u32>,
    pub fta: Option<u32>,
    pub ft_pct: Option<f64>,
    pub orb: Option<u32>,
    pub drb: Option<u32>,
    pub tov: Option<u32>,
}

/// A game's scoring by period for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineScore {
    pub team: String,
    pub is_home: bool,
    pub q1: Option<u32>,
    pub q2: Option<u32>,
    pub q3: Option<u32>,
    pub q4: Option<u32>,
    pub ot1: Option<u32>,
    pub ot2: Option<u32>,
    pub ot3: Option<u32>,
    pub ot4: Option<u32>,
    pub total: Option<u32>,
}

/// One standings row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsItem {
    pub team_id: String,
    pub full_name: Option<String>,
    pub abbreviation: Option<String>,
    pub team: Option<String>,
    pub logo_url: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub games_played: Option<u32>,
    pub win_pct: Option<f64>,
    pub wl_pct: Option<f64>,
    pub games_behind: Option<f64>,
    pub gb: Option<f64>,
    pub points_per_game: Option<f64>,
    pub opponent_points_per_game: Option<f64>,
    pub ps_g: Option<f64>,
    pub pa_g: Option<f64>,
    pub simple_rating_system: Option<f64>,
    pub pace: Option<f64>,
    pub offensive_rating: Option<f64>,
    pub defensive_rating: Option<f64>,
    pub net_rating: Option<f64>,
    pub pw: Option<f64>,
    pub pl: Option<f64>,
}
