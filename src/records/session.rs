//! Session records
//!
//! A session is one timed on-track segment (a practice, qualifying, or race
//! run) within a meeting.

use serde::{Deserialize, Serialize};

/// A session as reported by the timing API.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Session {
    /// Championship year
    pub year: i32,
    /// Meeting (race weekend) this session belongs to
    pub meeting_key: u32,
    /// Unique session identifier
    pub session_key: u32,
    /// Session type, e.g. "Practice", "Qualifying", "Race"
    pub session_type: String,
    /// Session name, e.g. "Practice 1", "Sprint", "Race"
    pub session_name: String,
    pub country_key: u32,
    pub country_code: String,
    pub country_name: String,
    pub location: String,
    pub circuit_key: u32,
    pub circuit_short_name: String,
    /// UTC session start, ISO 8601
    pub date_start: String,
    /// UTC session end, ISO 8601
    pub date_end: String,
    pub gmt_offset: String,
}
