//! Fuel-stop injection: no driving segment may run longer than the fuel
//! interval (1000 miles).
//!
//! Purely structural: duty state is never consulted. Long driving legs are
//! rewritten into full-interval hops separated by 30-minute fuel segments,
//! with a remainder hop for leftover distance. Everything else passes
//! through unchanged.

use crate::model::{FUEL_INTERVAL_MILES, Segment, SegmentKind};

/// Rewrites `legs` so no driving segment exceeds the fuel interval.
///
/// Intermediate waypoints are named from the original endpoints and a stop
/// ordinal, so identical input always yields identical output.
pub fn inject_fuel_stops(legs: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(legs.len());

    for leg in legs {
        if leg.kind == SegmentKind::Driving && leg.distance_miles > FUEL_INTERVAL_MILES {
            split_at_fuel_stops(&leg, &mut result);
        } else {
            result.push(leg);
        }
    }

    result
}

/// Emits `leg` as full-interval hops separated by fuel stops, plus a final
/// remainder hop (omitted when the remainder is exactly zero).
fn split_at_fuel_stops(leg: &Segment, result: &mut Vec<Segment>) {
    let mut remaining = leg.distance_miles;
    let mut from = leg.start_location.clone();
    let mut stop = 0u32;

    while remaining > FUEL_INTERVAL_MILES {
        stop += 1;
        let waypoint = fuel_waypoint(stop, leg);
        result.push(Segment::driving(&from, &waypoint, FUEL_INTERVAL_MILES));
        result.push(Segment::stop(SegmentKind::Fuel, &waypoint));
        from = waypoint;
        remaining -= FUEL_INTERVAL_MILES;
    }

    if remaining > 0.0 {
        result.push(Segment::driving(from, &leg.end_location, remaining));
    }
}

/// Deterministic name for the nth fuel waypoint along a leg.
fn fuel_waypoint(n: u32, leg: &Segment) -> String {
    format!(
        "Fuel Stop {n} ({} to {})",
        leg.start_location, leg.end_location
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_driving_miles(segments: &[Segment]) -> f64 {
        segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Driving)
            .map(|s| s.distance_miles)
            .sum()
    }

    #[test]
    fn short_legs_pass_through_unchanged() {
        let legs = vec![
            Segment::driving("A", "B", 1000.0),
            Segment::stop(SegmentKind::Pickup, "B"),
        ];
        let out = inject_fuel_stops(legs.clone());
        assert_eq!(out, legs);
    }

    #[test]
    fn long_leg_splits_with_fuel_stops_between_hops() {
        let out = inject_fuel_stops(vec![Segment::driving("A", "B", 2500.0)]);

        let kinds: Vec<_> = out.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Driving,
                SegmentKind::Fuel,
                SegmentKind::Driving,
                SegmentKind::Fuel,
                SegmentKind::Driving,
            ]
        );
        assert!((out[0].distance_miles - 1000.0).abs() < 1e-9);
        assert!((out[2].distance_miles - 1000.0).abs() < 1e-9);
        assert!((out[4].distance_miles - 500.0).abs() < 1e-9);
        assert_eq!(out[4].end_location, "B");
    }

    #[test]
    fn exact_multiple_omits_zero_remainder_and_trailing_fuel() {
        let out = inject_fuel_stops(vec![Segment::driving("A", "B", 2000.0)]);

        let kinds: Vec<_> = out.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SegmentKind::Driving, SegmentKind::Fuel, SegmentKind::Driving]
        );
        assert!((out[2].distance_miles - 1000.0).abs() < 1e-9);
        assert_eq!(out[2].end_location, "B");
    }

    #[test]
    fn total_distance_is_preserved_and_hops_are_capped() {
        let out = inject_fuel_stops(vec![Segment::driving("A", "B", 3456.7)]);

        assert!((total_driving_miles(&out) - 3456.7).abs() < 1e-9);
        for segment in out.iter().filter(|s| s.kind == SegmentKind::Driving) {
            assert!(segment.distance_miles <= FUEL_INTERVAL_MILES + 1e-9);
        }
    }

    #[test]
    fn waypoint_names_are_deterministic() {
        let leg = vec![Segment::driving("Chicago, IL", "Los Angeles, CA", 2015.0)];
        let a = inject_fuel_stops(leg.clone());
        let b = inject_fuel_stops(leg);
        assert_eq!(a, b);
        assert_eq!(
            a[0].end_location,
            "Fuel Stop 1 (Chicago, IL to Los Angeles, CA)"
        );
        assert_eq!(
            a[2].end_location,
            "Fuel Stop 2 (Chicago, IL to Los Angeles, CA)"
        );
    }
}
