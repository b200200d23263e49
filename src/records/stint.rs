//! Tyre stint records
//!
//! A stint is a continuous run on one tyre set, bounded by an inclusive lap
//! range.

use serde::{Deserialize, Serialize};

/// A tyre stint as reported by the timing API.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Stint {
    pub meeting_key: u32,
    pub session_key: u32,
    pub driver_number: u32,
    /// Stint index, unique per driver within a session
    pub stint_number: u32,
    /// Tyre compound, e.g. "SOFT", "MEDIUM", "HARD"
    pub compound: String,
    /// Laps already run on this tyre set when the stint started
    pub tyre_age_at_start: u32,
    /// First lap of the stint (inclusive)
    pub lap_start: u32,
    /// Last lap of the stint (inclusive); `lap_start <= lap_end`
    pub lap_end: u32,
}
