//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use hoops_stats::{
    cli::{Commands, GetCmd, HoopsStats},
    commands::{
        common::CommandContext,
        game_data::{handle_four_factors, handle_line_score, handle_season_factors},
        standings::handle_standings,
        team_data::{handle_game_log, handle_schedule},
    },
};
use tracing_subscriber::EnvFilter;

/// Log to stderr so JSON output on stdout stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "hoops_stats=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = HoopsStats::parse();
    init_logging(app.verbose);

    let ctx = CommandContext::new(app.db)?;

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::FourFactors { game_id, output } => {
                handle_four_factors(&ctx, &game_id, output.json)?
            }
            GetCmd::LineScore { game_id, output } => handle_line_score(&ctx, &game_id, output.json)?,
            GetCmd::SeasonFactors { season, output } => {
                handle_season_factors(&ctx, &season, output.json)?
            }
            GetCmd::Standings {
                season,
                conference,
                output,
            } => handle_standings(&ctx, &season, conference, output.json)?,
            GetCmd::Schedule { team, output } => handle_schedule(&ctx, &team, output.json)?,
            GetCmd::GameLog { team, output } => handle_game_log(&ctx, &team, output.json)?,
        },
    }

    Ok(())
}
