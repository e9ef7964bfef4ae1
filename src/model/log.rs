//! Duty-status log types: one entry per (segment, calendar day) pair.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::SegmentKind;

/// ELD duty-status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Driving,
    OnDutyNotDriving,
    OffDuty,

    /// Present in the log format but never produced by the planner, which
    /// records all rest as off-duty.
    SleeperBerth,
}

impl DutyStatus {
    /// The fixed segment-kind → duty-status mapping.
    ///
    /// Total over the closed kind enum; stationary on-duty work is the
    /// catch-all arm.
    pub fn for_kind(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Driving => Self::Driving,
            SegmentKind::Break | SegmentKind::Rest => Self::OffDuty,
            SegmentKind::Pickup | SegmentKind::Dropoff | SegmentKind::Fuel => {
                Self::OnDutyNotDriving
            }
        }
    }

    /// Stable string form, used for storage columns and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::OnDutyNotDriving => "on_duty_not_driving",
            Self::OffDuty => "off_duty",
            Self::SleeperBerth => "sleeper_berth",
        }
    }

    /// Parses the stable string form back into a status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "driving" => Some(Self::Driving),
            "on_duty_not_driving" => Some(Self::OnDutyNotDriving),
            "off_duty" => Some(Self::OffDuty),
            "sleeper_berth" => Some(Self::SleeperBerth),
            _ => None,
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One duty-status slice of one calendar day.
///
/// For a planned trip, entries ordered by (date, start) are contiguous and
/// non-overlapping; one entry's end is the instant before the next entry's
/// start, except at exact day boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: Date,
    pub status: DutyStatus,
    pub start_time: Time,
    pub end_time: Time,
    pub location: String,
}
