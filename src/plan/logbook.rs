//! Log partitioning: converts the compliant segment sequence into
//! per-calendar-day duty-status entries.
//!
//! A running wall-clock instant walks the segments in order. A segment that
//! crosses one or more midnights is split into an entry per calendar day,
//! so concatenating all entries reconstructs the trip's exact continuous
//! timeline with no gaps and no overlaps.

use jiff::Span;
use jiff::civil::{DateTime, Time, time};

use crate::model::{DutyStatus, LogEntry, Segment};

/// Last logged instant of a day; the next entry starts at the next midnight.
const END_OF_DAY: Time = time(23, 59, 59, 0);

/// Partitions `segments` into log entries starting at `start`, which is
/// truncated to the hour to keep the log grid clean.
///
/// Errors only when the timeline walks out of jiff's civil datetime range.
pub fn partition(segments: &[Segment], start: DateTime) -> Result<Vec<LogEntry>, jiff::Error> {
    let mut current = truncate_to_hour(start);
    let mut entries = Vec::new();

    for segment in segments {
        let end = current.checked_add(duration_span(segment.duration_hours))?;
        let status = DutyStatus::for_kind(segment.kind);
        push_entries(&mut entries, status, &segment.start_location, current, end)?;
        current = end;
    }

    Ok(entries)
}

/// Emits the entries covering `[current, end)` for one segment.
fn push_entries(
    entries: &mut Vec<LogEntry>,
    status: DutyStatus,
    location: &str,
    current: DateTime,
    end: DateTime,
) -> Result<(), jiff::Error> {
    let entry = |date, start_time, end_time| LogEntry {
        date,
        status,
        start_time,
        end_time,
        location: location.to_string(),
    };

    if current.date() == end.date() {
        entries.push(entry(current.date(), current.time(), end.time()));
        return Ok(());
    }

    // First day: from the current instant to the last instant of its date.
    entries.push(entry(current.date(), current.time(), END_OF_DAY));

    // Full entries for each calendar day strictly between the two dates.
    let mut date = current.date().tomorrow()?;
    while date < end.date() {
        entries.push(entry(date, Time::midnight(), END_OF_DAY));
        date = date.tomorrow()?;
    }

    // Final day: from midnight to the end instant.
    entries.push(entry(end.date(), Time::midnight(), end.time()));
    Ok(())
}

/// Rounds a trip start down to the whole hour.
fn truncate_to_hour(dt: DateTime) -> DateTime {
    dt.date().at(dt.hour(), 0, 0, 0)
}

/// Converts fractional hours to a second-resolution span.
fn duration_span(hours: f64) -> Span {
    Span::new().seconds((hours * 3600.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::SegmentKind;

    #[test]
    fn same_day_segment_yields_one_entry() {
        let segments = vec![Segment::driving("A", "B", 240.0)]; // 4h
        let start = date(2025, 3, 10).at(8, 0, 0, 0);

        let entries = partition(&segments, start).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, date(2025, 3, 10));
        assert_eq!(entries[0].start_time, time(8, 0, 0, 0));
        assert_eq!(entries[0].end_time, time(12, 0, 0, 0));
        assert_eq!(entries[0].status, DutyStatus::Driving);
        assert_eq!(entries[0].location, "A");
    }

    #[test]
    fn midnight_crossing_splits_into_two_entries() {
        // 22:00 + 4h: [22:00, 23:59:59] on day one, [00:00, 02:00] on day two.
        let segments = vec![Segment::driving("A", "B", 240.0)];
        let start = date(2025, 3, 10).at(22, 0, 0, 0);

        let entries = partition(&segments, start).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].date, date(2025, 3, 10));
        assert_eq!(entries[0].start_time, time(22, 0, 0, 0));
        assert_eq!(entries[0].end_time, END_OF_DAY);

        assert_eq!(entries[1].date, date(2025, 3, 11));
        assert_eq!(entries[1].start_time, Time::midnight());
        assert_eq!(entries[1].end_time, time(2, 0, 0, 0));
    }

    #[test]
    fn multi_day_segment_fills_whole_intermediate_days() {
        // 74 hours of off-duty from 20:00 crosses three midnights.
        let segment = Segment {
            kind: SegmentKind::Rest,
            start_location: "Depot".into(),
            end_location: "Depot".into(),
            distance_miles: 0.0,
            duration_hours: 74.0,
        };
        let start = date(2025, 6, 1).at(20, 0, 0, 0);

        let entries = partition(&[segment], start).unwrap();
        assert_eq!(entries.len(), 4);

        assert_eq!(entries[0].date, date(2025, 6, 1));
        assert_eq!(entries[0].start_time, time(20, 0, 0, 0));
        assert_eq!(entries[0].end_time, END_OF_DAY);

        for (i, entry) in entries[1..3].iter().enumerate() {
            assert_eq!(entry.date, date(2025, 6, 2 + i as i8));
            assert_eq!(entry.start_time, Time::midnight());
            assert_eq!(entry.end_time, END_OF_DAY);
        }

        // 20:00 on June 1 plus 74h ends at 22:00 on June 4.
        assert_eq!(entries[3].date, date(2025, 6, 4));
        assert_eq!(entries[3].start_time, Time::midnight());
        assert_eq!(entries[3].end_time, time(22, 0, 0, 0));
    }

    #[test]
    fn start_is_truncated_to_the_hour() {
        let segments = vec![Segment::stop(SegmentKind::Pickup, "B")];
        let start = date(2025, 3, 10).at(8, 42, 17, 0);

        let entries = partition(&segments, start).unwrap();
        assert_eq!(entries[0].start_time, time(8, 0, 0, 0));
        assert_eq!(entries[0].end_time, time(9, 0, 0, 0));
        assert_eq!(entries[0].status, DutyStatus::OnDutyNotDriving);
    }

    #[test]
    fn consecutive_segments_tile_the_timeline() {
        let segments = vec![
            Segment::driving("A", "B", 300.0), // 5h
            Segment::stop(SegmentKind::Pickup, "B"),
            Segment::driving("B", "C", 480.0), // 8h
            Segment::stop(SegmentKind::Rest, "C"),
            Segment::driving("C", "D", 120.0), // 2h
        ];
        let start = date(2025, 3, 10).at(6, 0, 0, 0);
        let entries = partition(&segments, start).unwrap();

        // Each entry begins where the previous one ended: either the same
        // instant within a day, or midnight after a 23:59:59 day end.
        let mut previous: Option<&LogEntry> = None;
        for entry in &entries {
            assert!(entry.start_time <= entry.end_time);
            if let Some(prev) = previous {
                if entry.date == prev.date {
                    assert_eq!(entry.start_time, prev.end_time);
                } else {
                    assert_eq!(prev.end_time, END_OF_DAY);
                    assert_eq!(entry.date, prev.date.tomorrow().unwrap());
                    assert_eq!(entry.start_time, Time::midnight());
                }
            }
            previous = Some(entry);
        }

        // Total duration is 5 + 1 + 8 + 10 + 2 = 26h from 06:00.
        let last = entries.last().unwrap();
        assert_eq!(last.date, date(2025, 3, 11));
        assert_eq!(last.end_time, time(8, 0, 0, 0));
    }

    #[test]
    fn segment_ending_exactly_at_midnight_closes_on_the_next_date() {
        // 22:00 + 2h lands exactly on the day boundary.
        let segments = vec![Segment::driving("A", "B", 120.0)];
        let start = date(2025, 3, 10).at(22, 0, 0, 0);

        let entries = partition(&segments, start).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].end_time, END_OF_DAY);
        assert_eq!(entries[1].date, date(2025, 3, 11));
        assert_eq!(entries[1].start_time, Time::midnight());
        assert_eq!(entries[1].end_time, Time::midnight());
    }

    #[test]
    fn statuses_follow_the_segment_kinds() {
        let segments = vec![
            Segment::driving("A", "B", 60.0),
            Segment::stop(SegmentKind::Fuel, "B"),
            Segment::stop(SegmentKind::Break, "B"),
        ];
        let start = date(2025, 3, 10).at(9, 0, 0, 0);

        let entries = partition(&segments, start).unwrap();
        let statuses: Vec<_> = entries.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                DutyStatus::Driving,
                DutyStatus::OnDutyNotDriving,
                DutyStatus::OffDuty,
            ]
        );
    }
}
