//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GameId, SeasonId, TeamId};

/// Output arguments shared between commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Pace, the four factors, and ratings for both teams of one game.
    FourFactors {
        /// Game ID (e.g. 0022300001).
        game_id: GameId,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Points by quarter and overtime period for one game.
    ///
    /// Reads the line score table and falls back to the period columns
    /// stored with the game itself.
    LineScore {
        /// Game ID (e.g. 0022300001).
        game_id: GameId,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Four factors for every game of a season.
    SeasonFactors {
        /// Season ID (e.g. 2023-24).
        season: SeasonId,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Season standings with pythagorean wins and losses.
    Standings {
        /// Season ID (e.g. 2023-24).
        season: SeasonId,

        /// Only teams from this conference (case-insensitive).
        #[clap(long, short)]
        conference: Option<String>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// A team's schedule and results with running record and streak.
    Schedule {
        /// Team ID or abbreviation (e.g. BOS).
        team: TeamId,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// A team's game log with its own shooting and rebounding.
    GameLog {
        /// Team ID or abbreviation (e.g. BOS).
        team: TeamId,

        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "hoops-stats", about = "Derived basketball statistics from a local database")]
pub struct HoopsStats {
    /// Path to the stats database (or set `HOOPS_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log debug output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get derived statistics
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
