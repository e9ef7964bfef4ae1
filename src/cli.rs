//! CLI interface for linehaul.
//!
//! Non-interactive: arguments in, structured output out.
//!
//! Commands split into two groups:
//!
//! - `linehaul trip new|list` — trip lifecycle, no trip context needed.
//! - `linehaul --trip <id> <command>` — everything else, operating on one trip.
//!
//! The `--trip` flag takes a full UUID or unambiguous prefix.

mod format;
mod plan;
mod trip;

use clap::{Parser, Subcommand};

use crate::model::Trip;
use crate::storage::Storage;

use trip::TripCommand;

/// linehaul — plan truck trips under Hours-of-Service rules.
#[derive(Debug, Parser)]
#[command(name = "linehaul", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Trip ID: full UUID or unambiguous prefix (e.g. `a3b`).
    /// Required for plan, segments, and logs.
    #[arg(long, global = true)]
    trip: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: planning a trip
  1. linehaul trip new "Chicago, IL" "St. Louis, MO" "Dallas, TX" --hours-used 12.5
     → prints a trip ID (e.g. a3b0fc12)
  2. linehaul --trip a3b plan --start 2025-03-10T08:00:00
     → inserts fuel stops, breaks, and rests; prints segments and daily log
  3. linehaul --trip a3b segments
  4. linehaul --trip a3b logs --json"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage trips: create new ones, list existing.
    Trip {
        #[command(subcommand)]
        command: TripCommand,
    },

    /// Plan the trip's route under HOS regulations and persist it.
    ///
    /// Replaces any previously stored plan. Requires `--trip`.
    Plan {
        /// Wall-clock instant the trip starts (e.g. 2025-03-10T08:00:00).
        /// Defaults to now; truncated to the hour in the log.
        #[arg(long)]
        start: Option<String>,

        /// Print the plan as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Print the stored segment sequence. Requires `--trip`.
    Segments {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the stored daily duty-status log. Requires `--trip`.
    Logs {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Parses arguments and runs the selected command.
pub fn run(storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Trip { command } => match command {
            TripCommand::New {
                current_location,
                pickup_location,
                dropoff_location,
                hours_used,
            } => trip::cmd_new(
                storage,
                &current_location,
                &pickup_location,
                &dropoff_location,
                hours_used,
            ),
            TripCommand::List => trip::cmd_list(storage),
        },
        Command::Plan { start, json } => {
            let trip = resolve_trip(storage, cli.trip.as_deref())?;
            plan::cmd_plan(storage, &trip, start.as_deref(), json)
        }
        Command::Segments { json } => {
            let trip = resolve_trip(storage, cli.trip.as_deref())?;
            plan::cmd_segments(storage, &trip, json)
        }
        Command::Logs { json } => {
            let trip = resolve_trip(storage, cli.trip.as_deref())?;
            plan::cmd_logs(storage, &trip, json)
        }
    }
}

/// Loads the trip named by `--trip`, resolving a UUID prefix.
fn resolve_trip(storage: &Storage, flag: Option<&str>) -> Result<Trip, String> {
    let prefix = flag.ok_or("this command requires --trip <id>")?;
    let id = storage
        .find_trip(prefix)
        .map_err(|e| format!("could not resolve trip: {e}"))?;
    storage
        .load_trip(id)
        .map_err(|e| format!("failed to load trip: {e}"))
}
