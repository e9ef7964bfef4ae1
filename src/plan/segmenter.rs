//! The regulation segmenter: turns an ordered leg sequence into an
//! HOS-compliant segment sequence.
//!
//! A FIFO work queue is seeded with the input legs. Each step takes the
//! front leg and either emits it, or emits an inserted break/rest and pushes
//! the leg (or its unconsumed remainder) back to the FRONT of the queue, so
//! "the same leg, now shorter" is retried without duplicating logic.
//!
//! Every step either shrinks the remaining driving time or resets a counter
//! so the same leg fits on its next attempt, which bounds the run.

use std::collections::VecDeque;

use crate::hos::{BREAK_AFTER_HOURS, DRIVING_LIMIT_HOURS, DUTY_WINDOW_HOURS};
use crate::model::{Segment, SegmentKind};

/// Below this many hours of remaining driving allowance, a proportional
/// split would make no progress; the step inserts a rest instead.
const MIN_SPLIT_HOURS: f64 = 1e-9;

/// Per-shift counters, mirroring the duty-state tracker but counting up
/// from the last 10-hour reset. `cycle_hours` is monotonic for the whole
/// run: it is tracked for visibility, never gates a decision, and is never
/// reset by rest.
#[derive(Debug, Clone, Copy, Default)]
struct ShiftClock {
    hours_driving: f64,
    hours_duty: f64,
    cycle_hours: f64,
    hours_since_break: f64,
}

impl ShiftClock {
    fn new(current_hours_used: f64) -> Self {
        Self {
            cycle_hours: current_hours_used,
            ..Self::default()
        }
    }

    /// Driving advances all four counters.
    fn drive(&mut self, hours: f64) {
        self.hours_driving += hours;
        self.hours_duty += hours;
        self.cycle_hours += hours;
        self.hours_since_break += hours;
    }

    /// Stationary on-duty work advances the duty window and cycle only.
    fn on_duty(&mut self, hours: f64) {
        self.hours_duty += hours;
        self.cycle_hours += hours;
    }

    /// A 10-hour rest starts a fresh shift. The cycle keeps counting.
    fn rest_reset(&mut self) {
        self.hours_driving = 0.0;
        self.hours_duty = 0.0;
        self.hours_since_break = 0.0;
    }

    fn driving_hours_left(&self) -> f64 {
        DRIVING_LIMIT_HOURS - self.hours_driving
    }

    fn break_due(&self) -> bool {
        self.hours_since_break >= BREAK_AFTER_HOURS
    }
}

/// What one step produced: segments to emit, and optionally a leg to push
/// back to the front of the queue.
struct Step {
    emitted: Vec<Segment>,
    requeue: Option<Segment>,
}

impl Step {
    fn emit(segment: Segment) -> Self {
        Self {
            emitted: vec![segment],
            requeue: None,
        }
    }
}

/// Applies HOS regulations to the fuel-expanded leg sequence, inserting
/// 30-minute breaks and 10-hour rests wherever a limit would otherwise be
/// breached. Deterministic: one canonical output per input.
pub fn apply_regulations(legs: Vec<Segment>, current_hours_used: f64) -> Vec<Segment> {
    let mut queue: VecDeque<Segment> = legs.into();
    let mut clock = ShiftClock::new(current_hours_used);
    let mut planned = Vec::new();

    while let Some(leg) = queue.pop_front() {
        let outcome = step(&mut clock, leg);
        planned.extend(outcome.emitted);
        if let Some(leg) = outcome.requeue {
            queue.push_front(leg);
        }
    }

    planned
}

/// Processes one leg against the current shift clock.
fn step(clock: &mut ShiftClock, leg: Segment) -> Step {
    match leg.kind {
        SegmentKind::Driving => step_driving(clock, leg),
        SegmentKind::Break | SegmentKind::Rest => step_pause(clock, leg),
        SegmentKind::Pickup | SegmentKind::Dropoff | SegmentKind::Fuel => {
            clock.on_duty(leg.duration_hours);
            Step::emit(leg)
        }
    }
}

/// A driving leg, gated in order: break due, 11-hour driving limit,
/// 14-hour duty window, then emit.
fn step_driving(clock: &mut ShiftClock, leg: Segment) -> Step {
    // 8 hours of driving since the last break: insert the 30-minute break
    // before consuming any of the leg.
    if clock.break_due() {
        clock.hours_since_break = 0.0;
        clock.on_duty(0.5);
        return Step {
            emitted: vec![Segment::stop(SegmentKind::Break, &leg.start_location)],
            requeue: Some(leg),
        };
    }

    let remaining = clock.driving_hours_left();

    if leg.duration_hours > remaining {
        // With no allowance left a split emits nothing; rest and retry.
        if remaining < MIN_SPLIT_HOURS {
            return insert_rest(clock, leg);
        }

        let waypoint = rest_waypoint(&leg);
        let (head, tail) = split_driving(&leg, remaining, &waypoint);
        clock.drive(remaining);
        clock.rest_reset();
        return Step {
            emitted: vec![head, Segment::stop(SegmentKind::Rest, &waypoint)],
            requeue: Some(tail),
        };
    }

    // Driving hours remain, but the duty window cannot fit the leg.
    if clock.hours_duty + leg.duration_hours > DUTY_WINDOW_HOURS {
        return insert_rest(clock, leg);
    }

    clock.drive(leg.duration_hours);
    Step::emit(leg)
}

/// A break or rest already present in the input.
fn step_pause(clock: &mut ShiftClock, leg: Segment) -> Step {
    if leg.duration_hours >= 10.0 {
        clock.rest_reset();
    } else if leg.duration_hours >= 0.5 {
        clock.hours_since_break = 0.0;
        clock.on_duty(leg.duration_hours);
    } else {
        // Sub-30-minute stops count as duty time but reset nothing.
        clock.on_duty(leg.duration_hours);
    }
    Step::emit(leg)
}

/// Emits a 10-hour rest at the leg's start and retries the whole leg.
fn insert_rest(clock: &mut ShiftClock, leg: Segment) -> Step {
    clock.rest_reset();
    Step {
        emitted: vec![Segment::stop(SegmentKind::Rest, &leg.start_location)],
        requeue: Some(leg),
    }
}

/// Splits a driving leg after `hours` of it, interpolating distance
/// proportionally so neither miles nor time are lost.
///
/// Returns the consumed head (ending at `waypoint`) and the remainder
/// (from `waypoint` to the original destination).
fn split_driving(leg: &Segment, hours: f64, waypoint: &str) -> (Segment, Segment) {
    let partial_distance = (hours / leg.duration_hours) * leg.distance_miles;

    let head = Segment {
        kind: SegmentKind::Driving,
        start_location: leg.start_location.clone(),
        end_location: waypoint.to_string(),
        distance_miles: partial_distance,
        duration_hours: hours,
    };
    let tail = Segment {
        kind: SegmentKind::Driving,
        start_location: waypoint.to_string(),
        end_location: leg.end_location.clone(),
        distance_miles: leg.distance_miles - partial_distance,
        duration_hours: leg.duration_hours - hours,
    };
    (head, tail)
}

/// Deterministic name for the rest waypoint splitting a leg.
fn rest_waypoint(leg: &Segment) -> String {
    format!("Rest Stop ({} to {})", leg.start_location, leg.end_location)
}
