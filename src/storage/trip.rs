//! Trip storage: create, load, and list trips.

use rusqlite::Connection;
use uuid::Uuid;

use crate::model::Trip;

use super::{Result, Storage, StorageError};

impl Storage {
    /// Creates a new trip, writing its metadata to a new `SQLite` file.
    pub fn create_trip(&self, trip: &Trip) -> Result<()> {
        let conn = self.create_db(trip.id)?;
        conn.execute(
            "INSERT INTO trip (id, current_location, pickup_location, dropoff_location,
                               current_hours_used, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                trip.id.to_string(),
                &trip.current_location,
                &trip.pickup_location,
                &trip.dropoff_location,
                trip.current_hours_used,
                trip.created_at.to_string(),
            ],
        )?;
        Ok(())
    }

    /// Loads a single trip's metadata.
    pub fn load_trip(&self, id: Uuid) -> Result<Trip> {
        let conn = self.open_db(id)?;
        load_trip_row(&conn)
    }

    /// Lists all trips by reading each `.sqlite` file in the storage root.
    ///
    /// Unreadable or malformed files are silently skipped.
    pub fn list_trips(&self) -> Result<Vec<Trip>> {
        let mut trips = Vec::new();
        for id in self.trip_ids()? {
            let Ok(conn) = self.open_db(id) else {
                continue;
            };
            if let Ok(trip) = load_trip_row(&conn) {
                trips.push(trip);
            }
        }
        trips.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(trips)
    }
}

/// Reads the single trip row from an open connection.
fn load_trip_row(conn: &Connection) -> Result<Trip> {
    let (id_str, current, pickup, dropoff, hours_used, created_at_str) = conn.query_row(
        "SELECT id, current_location, pickup_location, dropoff_location,
                current_hours_used, created_at
         FROM trip LIMIT 1",
        [],
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
            ))
        },
    )?;

    let id = id_str
        .parse::<Uuid>()
        .map_err(|e| StorageError::Corrupt(format!("invalid trip id: {e}")))?;
    let created_at = created_at_str
        .parse::<jiff::Timestamp>()
        .map_err(|e| StorageError::Corrupt(format!("invalid created_at: {e}")))?;

    Ok(Trip {
        id,
        current_location: current,
        pickup_location: pickup,
        dropoff_location: dropoff,
        current_hours_used: hours_used,
        created_at,
    })
}
