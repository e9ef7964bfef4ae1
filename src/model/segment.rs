//! Segment types: the unit of trip activity flowing through the planner.

use serde::{Deserialize, Serialize};

/// Assumed average road speed, used to derive driving time from distance.
pub const AVERAGE_SPEED_MPH: f64 = 60.0;

/// Maximum distance a single driving segment may cover before a fuel stop.
pub const FUEL_INTERVAL_MILES: f64 = 1000.0;

/// What a segment is: driving, a regulated pause, or stationary on-duty work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Behind the wheel, covering distance.
    Driving,

    /// The 30-minute off-duty break required after 8 hours of driving.
    Break,

    /// A 10-hour off-duty rest that resets the driving limit and duty window.
    Rest,

    /// Loading at the shipper (1 hour).
    Pickup,

    /// Unloading at the receiver (1 hour).
    Dropoff,

    /// Refueling stop (30 minutes).
    Fuel,
}

impl SegmentKind {
    /// Stable string form, used for storage columns and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Break => "break",
            Self::Rest => "rest",
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
            Self::Fuel => "fuel",
        }
    }

    /// Parses the stable string form back into a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "driving" => Some(Self::Driving),
            "break" => Some(Self::Break),
            "rest" => Some(Self::Rest),
            "pickup" => Some(Self::Pickup),
            "dropoff" => Some(Self::Dropoff),
            "fuel" => Some(Self::Fuel),
            _ => None,
        }
    }

    /// Fixed duration in hours for non-driving kinds.
    /// Driving duration is derived from distance instead.
    fn stop_duration(self) -> f64 {
        match self {
            Self::Driving => 0.0,
            Self::Pickup | Self::Dropoff => 1.0,
            Self::Break | Self::Fuel => 0.5,
            Self::Rest => 10.0,
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic unit of trip activity.
///
/// Segments are immutable once emitted downstream: the segmenter splits a
/// driving segment by producing two new segments, never by mutating one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start_location: String,
    pub end_location: String,

    /// Miles covered; zero for every non-driving kind.
    pub distance_miles: f64,

    /// Hours spent; `distance_miles / 60` for driving, fixed otherwise.
    pub duration_hours: f64,
}

impl Segment {
    /// A driving segment between two locations.
    /// Duration is derived from distance at the assumed average speed.
    pub fn driving(
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            kind: SegmentKind::Driving,
            start_location: start_location.into(),
            end_location: end_location.into(),
            distance_miles,
            duration_hours: distance_miles / AVERAGE_SPEED_MPH,
        }
    }

    /// A stationary segment (break, rest, pickup, dropoff, fuel) at one
    /// location, with that kind's fixed duration.
    pub fn stop(kind: SegmentKind, location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            kind,
            start_location: location.clone(),
            end_location: location,
            distance_miles: 0.0,
            duration_hours: kind.stop_duration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driving_duration_derives_from_distance() {
        let segment = Segment::driving("Chicago, IL", "Denver, CO", 600.0);
        assert_eq!(segment.kind, SegmentKind::Driving);
        assert!((segment.duration_hours - 10.0).abs() < 1e-12);
        assert!((segment.distance_miles - 600.0).abs() < 1e-12);
    }

    #[test]
    fn stop_durations_are_fixed() {
        let cases = [
            (SegmentKind::Pickup, 1.0),
            (SegmentKind::Dropoff, 1.0),
            (SegmentKind::Fuel, 0.5),
            (SegmentKind::Break, 0.5),
            (SegmentKind::Rest, 10.0),
        ];
        for (kind, expected) in cases {
            let segment = Segment::stop(kind, "Amarillo, TX");
            assert!((segment.duration_hours - expected).abs() < 1e-12);
            assert!(segment.distance_miles.abs() < 1e-12);
            assert_eq!(segment.start_location, segment.end_location);
        }
    }

    #[test]
    fn kind_string_round_trip() {
        let kinds = [
            SegmentKind::Driving,
            SegmentKind::Break,
            SegmentKind::Rest,
            SegmentKind::Pickup,
            SegmentKind::Dropoff,
            SegmentKind::Fuel,
        ];
        for kind in kinds {
            assert_eq!(SegmentKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SegmentKind::parse("teleport"), None);
    }
}
