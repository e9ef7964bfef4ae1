//! linehaul: plan multi-leg truck trips under Hours-of-Service regulations
//! and emit a day-partitioned duty-status log.
//!
//! The core is `plan::plan_trip`, a pure function of (legs, starting cycle
//! hours, start instant) → (compliant segments, daily log entries).
//! `hos::DutyState` is the direct counter-tracking API the planner's limit
//! checks mirror. Everything else is glue: distance resolution, per-trip
//! `SQLite` storage, and the CLI.

pub mod cli;
pub mod config;
pub mod distance;
pub mod hos;
pub mod model;
pub mod plan;
pub mod storage;
