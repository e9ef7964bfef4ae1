//! Trip planning: the pipeline from raw legs to a compliant plan.
//!
//! `plan_trip` is a pure function of (legs, starting cycle hours, start
//! instant): fuel stops are injected, the regulation segmenter inserts
//! breaks and rests, and the log partitioner slices the result into
//! per-calendar-day entries. Independent trips can be planned in parallel;
//! a single run is inherently sequential since every step depends on the
//! previous counter state.

mod fuel;
mod logbook;
mod segmenter;

use jiff::civil::DateTime;
use thiserror::Error;

use crate::distance::{DistanceError, DistanceResolver};
use crate::model::{LogEntry, Segment, SegmentKind, Trip};

/// Errors surfaced by trip planning.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Malformed leg list or out-of-range starting hours.
    /// Rejected before any processing; no partial output.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A location could not be resolved to a distance.
    #[error(transparent)]
    Distance(#[from] DistanceError),

    /// The log timeline walked out of the representable datetime range.
    #[error("log timeline out of range: {0}")]
    TimeRange(#[from] jiff::Error),
}

pub type Result<T> = core::result::Result<T, PlanError>;

/// A planned trip: the compliant segment sequence and its daily log.
#[derive(Debug, Clone)]
pub struct TripPlan {
    pub segments: Vec<Segment>,
    pub logs: Vec<LogEntry>,
}

/// Plans a trip from its raw legs.
///
/// `current_hours_used` seeds the advisory 70-hour cycle counter and must
/// lie in `[0, 70]`. `start` is the wall-clock instant at which the first
/// segment begins.
pub fn plan_trip(
    legs: Vec<Segment>,
    current_hours_used: f64,
    start: DateTime,
) -> Result<TripPlan> {
    validate(&legs, current_hours_used)?;

    let legs = fuel::inject_fuel_stops(legs);
    let segments = segmenter::apply_regulations(legs, current_hours_used);
    let logs = logbook::partition(&segments, start)?;

    Ok(TripPlan { segments, logs })
}

/// Builds the raw legs for a stored trip: drive to the pickup, load for an
/// hour, drive to the dropoff, unload for an hour. Distances come from the
/// resolver; a resolution failure aborts with nothing planned.
pub fn build_trip_legs(
    trip: &Trip,
    resolver: &dyn DistanceResolver,
) -> core::result::Result<Vec<Segment>, DistanceError> {
    let to_pickup = resolver.resolve(&trip.current_location, &trip.pickup_location)?;
    let to_dropoff = resolver.resolve(&trip.pickup_location, &trip.dropoff_location)?;

    Ok(vec![
        Segment::driving(&trip.current_location, &trip.pickup_location, to_pickup),
        Segment::stop(SegmentKind::Pickup, &trip.pickup_location),
        Segment::driving(&trip.pickup_location, &trip.dropoff_location, to_dropoff),
        Segment::stop(SegmentKind::Dropoff, &trip.dropoff_location),
    ])
}

/// Rejects malformed input before any processing.
fn validate(legs: &[Segment], current_hours_used: f64) -> Result<()> {
    if !(0.0..=70.0).contains(&current_hours_used) {
        return Err(PlanError::InvalidInput(format!(
            "current hours used must be within 0-70, got {current_hours_used}"
        )));
    }

    for (i, leg) in legs.iter().enumerate() {
        if leg.distance_miles < 0.0 || leg.duration_hours < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "leg {i} has negative distance or duration"
            )));
        }
        if leg.kind == SegmentKind::Driving && leg.distance_miles <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "leg {i} is a driving leg with no distance"
            )));
        }
    }

    Ok(())
}
