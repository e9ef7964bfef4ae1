//! Distance resolution between named locations.
//!
//! The planner treats distance as a black box: anything that can turn two
//! location names into road-ish miles satisfies `DistanceResolver`. The
//! built-in `Gazetteer` resolves against a fixed table of city coordinates
//! with great-circle mileage: deterministic and offline, good enough for
//! planning at an assumed average speed.

use std::collections::HashMap;

use thiserror::Error;

/// Mean Earth radius in statute miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Errors from distance resolution.
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("location not found: {0}")]
    LocationNotFound(String),
}

/// Resolves the distance in miles between two named locations.
pub trait DistanceResolver {
    fn resolve(&self, from: &str, to: &str) -> Result<f64, DistanceError>;
}

/// An offline resolver backed by a name → coordinate table.
///
/// Lookups are case-insensitive and whitespace-trimmed.
pub struct Gazetteer {
    places: HashMap<String, (f64, f64)>,
}

impl Gazetteer {
    /// An empty gazetteer; populate it with `insert`.
    pub fn new() -> Self {
        Self {
            places: HashMap::new(),
        }
    }

    /// A gazetteer preloaded with major U.S. freight cities.
    pub fn builtin() -> Self {
        let mut g = Self::new();
        for &(name, lat, lon) in BUILTIN_PLACES {
            g.insert(name, lat, lon);
        }
        g
    }

    /// Adds or replaces a place by name.
    pub fn insert(&mut self, name: &str, latitude: f64, longitude: f64) {
        self.places.insert(normalize(name), (latitude, longitude));
    }

    fn lookup(&self, name: &str) -> Result<(f64, f64), DistanceError> {
        self.places
            .get(&normalize(name))
            .copied()
            .ok_or_else(|| DistanceError::LocationNotFound(name.to_string()))
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceResolver for Gazetteer {
    fn resolve(&self, from: &str, to: &str) -> Result<f64, DistanceError> {
        let a = self.lookup(from)?;
        let b = self.lookup(to)?;
        Ok(haversine_miles(a, b))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Great-circle distance between two (latitude, longitude) points.
fn haversine_miles((lat1, lon1): (f64, f64), (lat2, lon2): (f64, f64)) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Major U.S. freight cities: (name, latitude, longitude).
const BUILTIN_PLACES: &[(&str, f64, f64)] = &[
    ("Atlanta, GA", 33.749, -84.388),
    ("Boston, MA", 42.3601, -71.0589),
    ("Charlotte, NC", 35.2271, -80.8431),
    ("Chicago, IL", 41.8781, -87.6298),
    ("Columbus, OH", 39.9612, -82.9988),
    ("Dallas, TX", 32.7767, -96.797),
    ("Denver, CO", 39.7392, -104.9903),
    ("Detroit, MI", 42.3314, -83.0458),
    ("El Paso, TX", 31.7619, -106.485),
    ("Houston, TX", 29.7604, -95.3698),
    ("Indianapolis, IN", 39.7684, -86.1581),
    ("Jacksonville, FL", 30.3322, -81.6557),
    ("Kansas City, MO", 39.0997, -94.5786),
    ("Las Vegas, NV", 36.1699, -115.1398),
    ("Laredo, TX", 27.5306, -99.4803),
    ("Los Angeles, CA", 34.0522, -118.2437),
    ("Memphis, TN", 35.1495, -90.049),
    ("Miami, FL", 25.7617, -80.1918),
    ("Minneapolis, MN", 44.9778, -93.265),
    ("Nashville, TN", 36.1627, -86.7816),
    ("New Orleans, LA", 29.9511, -90.0715),
    ("New York, NY", 40.7128, -74.006),
    ("Oklahoma City, OK", 35.4676, -97.5164),
    ("Philadelphia, PA", 39.9526, -75.1652),
    ("Phoenix, AZ", 33.4484, -112.074),
    ("Portland, OR", 45.5152, -122.6784),
    ("Salt Lake City, UT", 40.7608, -111.891),
    ("San Antonio, TX", 29.4241, -98.4936),
    ("Seattle, WA", 47.6062, -122.3321),
    ("St. Louis, MO", 38.627, -90.1994),
];
