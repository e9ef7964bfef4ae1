//! Output formatting for CLI display.

use crate::model::{LogEntry, Segment, SegmentKind};

/// Format a segment as one table line.
pub(super) fn format_segment(segment: &Segment) -> String {
    let route = if segment.kind == SegmentKind::Driving {
        format!("{} -> {}", segment.start_location, segment.end_location)
    } else {
        segment.start_location.clone()
    };
    format!(
        "{:<8} {:>7.1} mi {:>6} {route}",
        segment.kind.as_str(),
        segment.distance_miles,
        format_hours(segment.duration_hours),
    )
}

/// Format a log entry as one table line.
pub(super) fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{}  {}-{}  {:<20} {}",
        entry.date,
        entry.start_time,
        entry.end_time,
        entry.status.as_str(),
        entry.location
    )
}

/// Format fractional hours as `Hh` or `HhMMm`.
fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    if m == 0 {
        format!("{h}h")
    } else {
        format!("{h}h{m:02}m")
    }
}
