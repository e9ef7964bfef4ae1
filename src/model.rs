//! Core data model for linehaul.
//!
//! These types represent the conceptual architecture:
//! trips, the segments a planned trip is made of, and the
//! per-calendar-day duty-status log entries derived from them.

mod log;
mod segment;
mod trip;

pub use log::{DutyStatus, LogEntry};
pub use segment::{AVERAGE_SPEED_MPH, FUEL_INTERVAL_MILES, Segment, SegmentKind};
pub use trip::Trip;
