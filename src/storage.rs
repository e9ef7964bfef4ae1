//! Local persistence for trips and their planned routes.
//!
//! Each trip lives in its own `SQLite` file under the storage root:
//!
//! ```text
//! <root>/<uuid>.sqlite
//!   trip        # one row of trip metadata
//!   segment     # the planned segment sequence, ordered by seq
//!   log_entry   # the daily duty-status log, ordered by seq
//! ```

mod plan;
mod trip;

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("trip not found: {0}")]
    TripNotFound(String),

    #[error("trip already exists: {0}")]
    TripAlreadyExists(Uuid),

    #[error("trip id '{0}' is ambiguous")]
    AmbiguousTrip(String),

    #[error("corrupt trip data: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Local file-based storage for trips.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.linehaul/trips/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".linehaul").join("trips"))
    }

    /// Resolves a full UUID or unambiguous prefix to a stored trip id.
    pub fn find_trip(&self, prefix: &str) -> Result<Uuid> {
        let mut matches = Vec::new();
        for id in self.trip_ids()? {
            if id.to_string().starts_with(prefix) {
                matches.push(id);
            }
        }
        match matches.as_slice() {
            [] => Err(StorageError::TripNotFound(prefix.to_string())),
            [id] => Ok(*id),
            _ => Err(StorageError::AmbiguousTrip(prefix.to_string())),
        }
    }

    /// All trip ids present in the storage root.
    ///
    /// Files that aren't named for a UUID are silently skipped.
    fn trip_ids(&self) -> Result<Vec<Uuid>> {
        let mut ids = Vec::new();
        let entries = match fs::read_dir(&self.root) {
            Ok(e) => e,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ids),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("sqlite") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && let Ok(id) = stem.parse::<Uuid>()
            {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Creates the database file for a new trip and applies the schema.
    fn create_db(&self, id: Uuid) -> Result<Connection> {
        let path = self.trip_path(id);
        if path.exists() {
            return Err(StorageError::TripAlreadyExists(id));
        }
        let conn = Connection::open(&path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }

    /// Opens an existing trip's database file.
    fn open_db(&self, id: Uuid) -> Result<Connection> {
        let path = self.trip_path(id);
        if !path.exists() {
            return Err(StorageError::TripNotFound(id.to_string()));
        }
        Ok(Connection::open(&path)?)
    }

    fn trip_path(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{id}.sqlite"))
    }
}

const SCHEMA: &str = "
CREATE TABLE trip (
    id                 TEXT PRIMARY KEY,
    current_location   TEXT NOT NULL,
    pickup_location    TEXT NOT NULL,
    dropoff_location   TEXT NOT NULL,
    current_hours_used REAL NOT NULL,
    created_at         TEXT NOT NULL
);

CREATE TABLE segment (
    seq            INTEGER PRIMARY KEY,
    kind           TEXT NOT NULL,
    start_location TEXT NOT NULL,
    end_location   TEXT NOT NULL,
    distance_miles REAL NOT NULL,
    duration_hours REAL NOT NULL
);

CREATE TABLE log_entry (
    seq        INTEGER PRIMARY KEY,
    date       TEXT NOT NULL,
    status     TEXT NOT NULL,
    start_time TEXT NOT NULL,
    end_time   TEXT NOT NULL,
    location   TEXT NOT NULL
);
";

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use tempfile::TempDir;

    use crate::model::Trip;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("trips")).unwrap();
        (dir, storage)
    }

    fn sample_trip() -> Trip {
        Trip {
            id: Uuid::new_v4(),
            current_location: "Chicago, IL".into(),
            pickup_location: "St. Louis, MO".into(),
            dropoff_location: "Dallas, TX".into(),
            current_hours_used: 12.5,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn find_trip_by_prefix() {
        let (_dir, storage) = test_storage();
        let trip = sample_trip();
        storage.create_trip(&trip).unwrap();

        let prefix = &trip.id.to_string()[..8];
        assert_eq!(storage.find_trip(prefix).unwrap(), trip.id);
        assert_eq!(storage.find_trip(&trip.id.to_string()).unwrap(), trip.id);
    }

    #[test]
    fn find_trip_unknown_prefix_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.find_trip("ffffffff").unwrap_err();
        assert!(matches!(err, StorageError::TripNotFound(_)));
    }

    #[test]
    fn find_trip_empty_prefix_with_multiple_trips_is_ambiguous() {
        let (_dir, storage) = test_storage();
        storage.create_trip(&sample_trip()).unwrap();
        storage.create_trip(&sample_trip()).unwrap();

        let err = storage.find_trip("").unwrap_err();
        assert!(matches!(err, StorageError::AmbiguousTrip(_)));
    }
}
