//! Trip metadata: the planning request as persisted.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trip to plan: where the truck is, where the load is, where it goes,
/// and how many cycle hours the driver has already used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,

    /// Hours already used of the 70-hour/8-day cycle, supplied by the caller.
    pub current_hours_used: f64,

    pub created_at: Timestamp,
}
