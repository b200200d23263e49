//! Report types produced by the analytics pipeline.
//!
//! Everything here is a value object: constructed once by the pipeline,
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::records::{Driver, Session};

/// Status of one mini-sector, translated from the raw timing code.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SegmentStatus {
    /// Yellow flag shown in this mini-sector (code 2048)
    #[serde(rename = "Y")]
    Yellow,
    /// Personal best (code 2049)
    #[serde(rename = "G")]
    Green,
    /// Session best (code 2051)
    #[serde(rename = "P")]
    Purple,
    /// Any other code, including missing data
    #[default]
    #[serde(rename = "U")]
    Unknown,
}

impl SegmentStatus {
    /// Translate a raw mini-sector code. Codes outside the three known
    /// status values — zero and negatives included — are `Unknown`.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(2048) => SegmentStatus::Yellow,
            Some(2049) => SegmentStatus::Green,
            Some(2051) => SegmentStatus::Purple,
            _ => SegmentStatus::Unknown,
        }
    }

    /// Single-character rendering used in text output.
    pub fn as_char(self) -> char {
        match self {
            SegmentStatus::Yellow => 'Y',
            SegmentStatus::Green => 'G',
            SegmentStatus::Purple => 'P',
            SegmentStatus::Unknown => 'U',
        }
    }
}

/// One classified lap.
///
/// `Default` yields the empty placeholder used when a report has no
/// qualifying best lap; downstream consumers rely on the field shape being
/// present either way.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapAnalytics {
    pub lap_number: u32,
    pub lap_duration: Option<f64>,
    pub date_start: Option<String>,
    pub duration_sector_1: Option<f64>,
    pub duration_sector_2: Option<f64>,
    pub duration_sector_3: Option<f64>,
    /// Complete lap: timed, not a pit-out lap, all three sectors present
    pub is_valid: bool,
    /// Slower than 1.05x the median valid lap time
    pub is_outlier: bool,
    pub segments_sector_1: Vec<SegmentStatus>,
    pub segments_sector_2: Vec<SegmentStatus>,
    pub segments_sector_3: Vec<SegmentStatus>,
}

/// Aggregated metrics for one tyre stint.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StintAnalytics {
    pub stint_number: u32,
    pub compound: String,
    pub tyre_age_at_start: u32,
    pub lap_start: u32,
    pub lap_end: u32,
    /// Structural lap span, `lap_end - lap_start + 1`; independent of how
    /// many laps actually carry data
    pub lap_count: u32,
    /// Fastest valid lap in the stint
    pub best_lap_duration: Option<f64>,
    /// Mean valid lap time, 3-decimal rounded
    pub avg_lap_duration: Option<f64>,
    /// Lap-time change per lap from a least-squares fit; positive means
    /// the tyre is degrading
    pub tyre_lap_degradation: Option<f64>,
    /// Population standard deviation of valid lap times; lower is more
    /// consistent
    pub consistency: Option<f64>,
}

/// Session identity fields carried on a report.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub year: i32,
    pub meeting_key: u32,
    pub session_key: u32,
    pub session_name: String,
    pub session_type: String,
    pub country_name: String,
    pub location: String,
    pub circuit_short_name: String,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            year: session.year,
            meeting_key: session.meeting_key,
            session_key: session.session_key,
            session_name: session.session_name.clone(),
            session_type: session.session_type.clone(),
            country_name: session.country_name.clone(),
            location: session.location.clone(),
            circuit_short_name: session.circuit_short_name.clone(),
        }
    }
}

/// Driver identity fields carried on a report.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverSummary {
    pub driver_number: u32,
    pub broadcast_name: Option<String>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name_acronym: Option<String>,
    pub team_name: Option<String>,
}

impl From<&Driver> for DriverSummary {
    fn from(driver: &Driver) -> Self {
        Self {
            driver_number: driver.driver_number,
            broadcast_name: driver.broadcast_name.clone(),
            full_name: driver.full_name.clone(),
            first_name: driver.first_name.clone(),
            last_name: driver.last_name.clone(),
            name_acronym: driver.name_acronym.clone(),
            team_name: driver.team_name.clone(),
        }
    }
}

/// Pit stop metrics. Reserved for a future derivation; reports currently
/// always carry an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PitStopAnalytics {
    pub duration: f64,
}

/// The complete analytics report for one driver in one session.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverSessionAnalytics {
    pub session: SessionSummary,
    pub driver: DriverSummary,
    /// Every lap, classified, in upstream order
    pub laps: Vec<LapAnalytics>,
    /// Fastest valid lap, or the empty placeholder when none qualifies
    pub best_lap: LapAnalytics,
    /// Stint metrics, ascending by stint number
    pub stints: Vec<StintAnalytics>,
    /// Reserved; not computed
    pub pit_stops: Vec<PitStopAnalytics>,
}
