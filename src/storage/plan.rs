//! Planned-route storage: the segment sequence and daily log for a trip.
//!
//! Re-planning replaces the stored plan wholesale: old rows are deleted and
//! new ones inserted in a single transaction, so readers never see a
//! half-written plan.

use uuid::Uuid;

use crate::model::{DutyStatus, LogEntry, Segment, SegmentKind};

use super::{Result, Storage, StorageError};

impl Storage {
    /// Saves a trip's plan, replacing any previously stored one.
    pub fn save_plan(&self, id: Uuid, segments: &[Segment], logs: &[LogEntry]) -> Result<()> {
        let mut conn = self.open_db(id)?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM segment", [])?;
        tx.execute("DELETE FROM log_entry", [])?;

        for (seq, segment) in segments.iter().enumerate() {
            tx.execute(
                "INSERT INTO segment (seq, kind, start_location, end_location,
                                      distance_miles, duration_hours)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    seq as i64,
                    segment.kind.as_str(),
                    &segment.start_location,
                    &segment.end_location,
                    segment.distance_miles,
                    segment.duration_hours,
                ],
            )?;
        }

        for (seq, entry) in logs.iter().enumerate() {
            tx.execute(
                "INSERT INTO log_entry (seq, date, status, start_time, end_time, location)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    seq as i64,
                    entry.date.to_string(),
                    entry.status.as_str(),
                    entry.start_time.to_string(),
                    entry.end_time.to_string(),
                    &entry.location,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Loads a trip's planned segments in plan order.
    pub fn load_segments(&self, id: Uuid) -> Result<Vec<Segment>> {
        let conn = self.open_db(id)?;
        let mut stmt = conn.prepare(
            "SELECT kind, start_location, end_location, distance_miles, duration_hours
             FROM segment ORDER BY seq",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })?;

        let mut segments = Vec::new();
        for row in rows {
            let (kind_str, start, end, distance, duration) = row?;
            let kind = SegmentKind::parse(&kind_str)
                .ok_or_else(|| StorageError::Corrupt(format!("unknown segment kind: {kind_str}")))?;
            segments.push(Segment {
                kind,
                start_location: start,
                end_location: end,
                distance_miles: distance,
                duration_hours: duration,
            });
        }
        Ok(segments)
    }

    /// Loads a trip's daily log in plan order.
    pub fn load_logs(&self, id: Uuid) -> Result<Vec<LogEntry>> {
        let conn = self.open_db(id)?;
        let mut stmt = conn.prepare(
            "SELECT date, status, start_time, end_time, location
             FROM log_entry ORDER BY seq",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (date_str, status_str, start_str, end_str, location) = row?;
            entries.push(LogEntry {
                date: parse_column(&date_str, "date")?,
                status: DutyStatus::parse(&status_str)
                    .ok_or_else(|| StorageError::Corrupt(format!("unknown status: {status_str}")))?,
                start_time: parse_column(&start_str, "start_time")?,
                end_time: parse_column(&end_str, "end_time")?,
                location,
            });
        }
        Ok(entries)
    }
}

/// Parses a jiff civil value from its stored text form.
fn parse_column<T: std::str::FromStr<Err = jiff::Error>>(s: &str, column: &str) -> Result<T> {
    s.parse()
        .map_err(|e| StorageError::Corrupt(format!("invalid {column}: {e}")))
}
