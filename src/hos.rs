//! Hours-of-Service duty state: the four live counters for one driver
//! within one continuous duty period.
//!
//! Pure state, no I/O. The regulation segmenter mirrors these limits with
//! its own per-shift counters (see `plan::segmenter`); this tracker is the
//! direct API, which refuses transitions that would breach a hard limit
//! instead of absorbing them.

use thiserror::Error;

/// The 11-hour driving limit within a duty window.
pub const DRIVING_LIMIT_HOURS: f64 = 11.0;

/// The 14-hour duty window within which all work must occur.
pub const DUTY_WINDOW_HOURS: f64 = 14.0;

/// The 70-hour/8-day on-duty cycle limit.
pub const CYCLE_LIMIT_HOURS: f64 = 70.0;

/// Driving time after which a 30-minute break is required.
pub const BREAK_AFTER_HOURS: f64 = 8.0;

/// An attempted transition would breach a hard HOS limit.
#[derive(Debug, Error)]
pub enum HosViolation {
    #[error("cannot drive {hours} hours: {reason}")]
    Driving { hours: f64, reason: &'static str },

    #[error("14-hour duty window expired")]
    DutyWindowExpired,
}

/// Counter values after a driving transition.
#[derive(Debug, Clone, Copy)]
pub struct DriveOutcome {
    pub driving_hours_left: f64,
    pub duty_window_left: f64,
    pub cycle_hours_left: f64,

    /// True once 8 cumulative driving hours have passed since the last break.
    pub break_needed: bool,
}

/// Live HOS counters for one driver, one duty period.
///
/// `driving_hours_left` and `duty_window_left` are tracked independently
/// and must both gate every driving decision; neither bounds the other.
#[derive(Debug, Clone, Copy)]
pub struct DutyState {
    driving_hours_left: f64,
    duty_window_left: f64,
    cycle_hours_left: f64,
    hours_since_break: f64,
}

impl DutyState {
    /// Fresh state for a planning run: full driving allowance and duty
    /// window, cycle seeded from the hours the driver has already used.
    pub fn new(current_hours_used: f64) -> Self {
        Self {
            driving_hours_left: DRIVING_LIMIT_HOURS,
            duty_window_left: DUTY_WINDOW_HOURS,
            cycle_hours_left: CYCLE_LIMIT_HOURS - current_hours_used,
            hours_since_break: 0.0,
        }
    }

    pub fn driving_hours_left(&self) -> f64 {
        self.driving_hours_left
    }

    pub fn duty_window_left(&self) -> f64 {
        self.duty_window_left
    }

    pub fn cycle_hours_left(&self) -> f64 {
        self.cycle_hours_left
    }

    pub fn hours_since_break(&self) -> f64 {
        self.hours_since_break
    }

    /// Whether the driver can legally drive for `hours` right now.
    ///
    /// Zero or negative hours are trivially drivable. Otherwise driving is
    /// barred when either limit is exhausted or a 30-minute break is due.
    pub fn can_drive(&self, hours: f64) -> bool {
        if hours <= 0.0 {
            return true;
        }
        if self.driving_hours_left <= 0.0 || self.duty_window_left <= 0.0 {
            return false;
        }
        if self.hours_since_break >= BREAK_AFTER_HOURS {
            return false;
        }
        hours <= self.driving_hours_left
    }

    /// Records `hours` of driving.
    ///
    /// Consumes the driving allowance, duty window, and cycle; advances the
    /// break timer. Refuses the whole transition when it is not legal.
    pub fn add_driving_time(&mut self, hours: f64) -> Result<DriveOutcome, HosViolation> {
        if !self.can_drive(hours) {
            return Err(HosViolation::Driving {
                hours,
                reason: self.drive_refusal(hours),
            });
        }

        self.driving_hours_left -= hours;
        self.duty_window_left -= hours;
        self.cycle_hours_left -= hours;
        self.hours_since_break += hours;

        Ok(DriveOutcome {
            driving_hours_left: self.driving_hours_left,
            duty_window_left: self.duty_window_left,
            cycle_hours_left: self.cycle_hours_left,
            break_needed: self.hours_since_break >= BREAK_AFTER_HOURS,
        })
    }

    /// Records `hours` of on-duty, non-driving work (pickup, dropoff, fuel).
    ///
    /// Consumes the duty window and cycle only: the driving allowance and
    /// the break timer are untouched.
    pub fn add_on_duty_time(&mut self, hours: f64) -> Result<(), HosViolation> {
        if self.duty_window_left <= 0.0 {
            return Err(HosViolation::DutyWindowExpired);
        }
        self.duty_window_left -= hours;
        self.cycle_hours_left -= hours;
        Ok(())
    }

    /// Records an off-duty pause of `hours`.
    ///
    /// 30 minutes or more resets the break timer; 10 hours or more
    /// additionally restores the full driving allowance and duty window.
    /// Rest never restores the cycle. Pauses under 30 minutes have no
    /// regulatory effect here; the caller accounts for them as duty time.
    pub fn take_break(&mut self, hours: f64) {
        if hours >= 0.5 {
            self.hours_since_break = 0.0;
        }
        if hours >= 10.0 {
            self.driving_hours_left = DRIVING_LIMIT_HOURS;
            self.duty_window_left = DUTY_WINDOW_HOURS;
        }
    }

    /// Names which gate refused a driving request, for the error message.
    fn drive_refusal(&self, hours: f64) -> &'static str {
        if self.driving_hours_left <= 0.0 {
            "11-hour driving limit exhausted"
        } else if self.duty_window_left <= 0.0 {
            "14-hour duty window exhausted"
        } else if self.hours_since_break >= BREAK_AFTER_HOURS {
            "30-minute break required"
        } else if hours > self.driving_hours_left {
            "exceeds remaining driving hours"
        } else {
            "not permitted"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn new_state_seeds_cycle_from_hours_used() {
        let state = DutyState::new(25.5);
        assert!(close(state.driving_hours_left(), 11.0));
        assert!(close(state.duty_window_left(), 14.0));
        assert!(close(state.cycle_hours_left(), 44.5));
        assert!(close(state.hours_since_break(), 0.0));
    }

    #[test]
    fn zero_or_negative_hours_are_trivially_drivable() {
        let mut state = DutyState::new(0.0);
        state.add_driving_time(11.0).unwrap();
        // Allowance exhausted, but a zero request is still fine.
        assert!(state.can_drive(0.0));
        assert!(state.can_drive(-1.0));
        assert!(!state.can_drive(0.1));
    }

    #[test]
    fn driving_consumes_three_counters_and_advances_break_timer() {
        let mut state = DutyState::new(10.0);
        let outcome = state.add_driving_time(4.0).unwrap();

        assert!(close(outcome.driving_hours_left, 7.0));
        assert!(close(outcome.duty_window_left, 10.0));
        assert!(close(outcome.cycle_hours_left, 56.0));
        assert!(!outcome.break_needed);
        assert!(close(state.hours_since_break(), 4.0));
    }

    #[test]
    fn break_needed_flag_set_at_eight_hours() {
        let mut state = DutyState::new(0.0);
        let outcome = state.add_driving_time(8.0).unwrap();
        assert!(outcome.break_needed);
        assert!(!state.can_drive(1.0));
    }

    #[test]
    fn driving_beyond_remaining_hours_is_refused() {
        let mut state = DutyState::new(0.0);
        state.add_driving_time(9.0).unwrap();
        state.take_break(0.5);

        let err = state.add_driving_time(3.0).unwrap_err();
        assert!(matches!(err, HosViolation::Driving { .. }));
        // State is untouched by a refused transition.
        assert!(close(state.driving_hours_left(), 2.0));
    }

    #[test]
    fn on_duty_consumes_window_and_cycle_only() {
        let mut state = DutyState::new(0.0);
        state.add_on_duty_time(1.0).unwrap();

        assert!(close(state.driving_hours_left(), 11.0));
        assert!(close(state.duty_window_left(), 13.0));
        assert!(close(state.cycle_hours_left(), 69.0));
        assert!(close(state.hours_since_break(), 0.0));
    }

    #[test]
    fn on_duty_with_expired_window_is_refused() {
        let mut state = DutyState::new(0.0);
        state.add_on_duty_time(14.0).unwrap();
        let err = state.add_on_duty_time(1.0).unwrap_err();
        assert!(matches!(err, HosViolation::DutyWindowExpired));
    }

    #[test]
    fn half_hour_break_resets_break_timer_only() {
        let mut state = DutyState::new(0.0);
        state.add_driving_time(8.0).unwrap();
        state.take_break(0.5);

        assert!(close(state.hours_since_break(), 0.0));
        assert!(close(state.driving_hours_left(), 3.0));
        assert!(close(state.duty_window_left(), 6.0));
    }

    #[test]
    fn ten_hour_rest_restores_driving_and_window_but_not_cycle() {
        let mut state = DutyState::new(0.0);
        state.add_driving_time(8.0).unwrap();
        state.take_break(0.5);
        state.add_on_duty_time(1.0).unwrap();
        state.take_break(10.0);

        assert!(close(state.driving_hours_left(), 11.0));
        assert!(close(state.duty_window_left(), 14.0));
        assert!(close(state.hours_since_break(), 0.0));
        // 8 driving + 1 on-duty stay spent against the cycle.
        assert!(close(state.cycle_hours_left(), 61.0));
    }

    #[test]
    fn sub_half_hour_pause_has_no_regulatory_effect() {
        let mut state = DutyState::new(0.0);
        state.add_driving_time(5.0).unwrap();
        state.take_break(0.25);
        assert!(close(state.hours_since_break(), 5.0));
    }
}
