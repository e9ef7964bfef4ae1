//! Trip lifecycle commands: new, list.

use clap::Subcommand;
use jiff::Timestamp;
use uuid::Uuid;

use crate::{model::Trip, storage::Storage};

#[derive(Debug, Subcommand)]
pub enum TripCommand {
    /// Create a new trip. Prints the trip ID.
    New {
        /// Where the truck is now.
        current_location: String,

        /// Where the load is picked up.
        pickup_location: String,

        /// Where the load is delivered.
        dropoff_location: String,

        /// Cycle hours the driver has already used (0-70).
        #[arg(long, default_value_t = 0.0)]
        hours_used: f64,
    },

    /// List trips.
    List,
}

pub(super) fn cmd_new(
    storage: &Storage,
    current_location: &str,
    pickup_location: &str,
    dropoff_location: &str,
    hours_used: f64,
) -> Result<(), String> {
    if !(0.0..=70.0).contains(&hours_used) {
        return Err(format!("--hours-used must be within 0-70, got {hours_used}"));
    }

    let trip = Trip {
        id: Uuid::new_v4(),
        current_location: current_location.to_string(),
        pickup_location: pickup_location.to_string(),
        dropoff_location: dropoff_location.to_string(),
        current_hours_used: hours_used,
        created_at: Timestamp::now(),
    };

    storage
        .create_trip(&trip)
        .map_err(|e| format!("failed to create trip: {e}"))?;

    println!("{}", trip.id);
    Ok(())
}

pub(super) fn cmd_list(storage: &Storage) -> Result<(), String> {
    let trips = storage
        .list_trips()
        .map_err(|e| format!("failed to list trips: {e}"))?;

    if trips.is_empty() {
        println!("No trips");
        return Ok(());
    }

    for trip in &trips {
        let short_id = &trip.id.to_string()[..8];
        println!(
            "{short_id}  {} -> {} -> {}  ({}h used)",
            trip.current_location,
            trip.pickup_location,
            trip.dropoff_location,
            trip.current_hours_used
        );
    }

    Ok(())
}
