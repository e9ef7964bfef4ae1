//! Planning commands: plan a trip's route, show stored segments and logs.

use jiff::Zoned;
use jiff::civil::DateTime;
use serde::Serialize;

use crate::distance::Gazetteer;
use crate::model::{LogEntry, Segment, Trip};
use crate::plan;
use crate::storage::Storage;

use super::format::{format_log_entry, format_segment};

#[derive(Serialize)]
struct PlanOutput<'a> {
    segments: &'a [Segment],
    logs: &'a [LogEntry],
}

/// Plans the trip's route, persists it, and prints the result.
pub(super) fn cmd_plan(
    storage: &Storage,
    trip: &Trip,
    start: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let start = match start {
        Some(s) => s
            .parse::<DateTime>()
            .map_err(|e| format!("invalid --start '{s}': {e}"))?,
        None => Zoned::now().datetime(),
    };

    let gazetteer = Gazetteer::builtin();
    let legs = plan::build_trip_legs(trip, &gazetteer).map_err(|e| e.to_string())?;
    let planned =
        plan::plan_trip(legs, trip.current_hours_used, start).map_err(|e| e.to_string())?;

    storage
        .save_plan(trip.id, &planned.segments, &planned.logs)
        .map_err(|e| format!("failed to save plan: {e}"))?;

    if json {
        print_json(&planned.segments, &planned.logs)?;
        return Ok(());
    }

    println!("Segments:");
    for segment in &planned.segments {
        println!("  {}", format_segment(segment));
    }
    println!("\nDaily log:");
    for entry in &planned.logs {
        println!("  {}", format_log_entry(entry));
    }
    Ok(())
}

/// Prints a trip's stored segments.
pub(super) fn cmd_segments(storage: &Storage, trip: &Trip, json: bool) -> Result<(), String> {
    let segments = storage
        .load_segments(trip.id)
        .map_err(|e| format!("failed to load segments: {e}"))?;

    if json {
        let out = serde_json::to_string_pretty(&segments).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if segments.is_empty() {
        println!("No plan; run `linehaul --trip <id> plan` first");
        return Ok(());
    }
    for segment in &segments {
        println!("{}", format_segment(segment));
    }
    Ok(())
}

/// Prints a trip's stored daily log.
pub(super) fn cmd_logs(storage: &Storage, trip: &Trip, json: bool) -> Result<(), String> {
    let logs = storage
        .load_logs(trip.id)
        .map_err(|e| format!("failed to load logs: {e}"))?;

    if json {
        let out = serde_json::to_string_pretty(&logs).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if logs.is_empty() {
        println!("No plan; run `linehaul --trip <id> plan` first");
        return Ok(());
    }
    for entry in &logs {
        println!("{}", format_log_entry(entry));
    }
    Ok(())
}

fn print_json(segments: &[Segment], logs: &[LogEntry]) -> Result<(), String> {
    let out = serde_json::to_string_pretty(&PlanOutput { segments, logs })
        .map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}
