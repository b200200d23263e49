//! Per-lap timing records
//!
//! One record per completed (or in-progress) lap for a driver in a session,
//! including sector durations, speed-trap readings, and the raw mini-sector
//! segment codes that the analytics layer translates to status symbols.

use serde::{Deserialize, Serialize};

/// A single lap as reported by the timing API.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Lap {
    /// Meeting this lap belongs to
    pub meeting_key: u32,
    /// Session this lap belongs to
    pub session_key: u32,
    /// Car number of the driver
    pub driver_number: u32,
    /// Lap number, unique within a driver and session
    pub lap_number: u32,
    /// Total lap time in seconds, absent while the lap is in progress or
    /// when timing data is missing
    pub lap_duration: Option<f64>,
    /// Whether the lap started from the pit lane
    pub is_pit_out_lap: bool,
    /// Sector 1 time in seconds
    pub duration_sector_1: Option<f64>,
    /// Sector 2 time in seconds
    pub duration_sector_2: Option<f64>,
    /// Sector 3 time in seconds
    pub duration_sector_3: Option<f64>,
    /// Speed at intermediate point 1, km/h
    pub i1_speed: Option<f64>,
    /// Speed at intermediate point 2, km/h
    pub i2_speed: Option<f64>,
    /// Speed at the speed trap, km/h
    pub st_speed: Option<f64>,
    /// UTC lap start timestamp, ISO 8601
    pub date_start: Option<String>,
    /// Raw mini-sector codes for sector 1; the API emits null for
    /// mini-sectors it has no data for
    pub segments_sector_1: Vec<Option<i64>>,
    /// Raw mini-sector codes for sector 2
    pub segments_sector_2: Vec<Option<i64>>,
    /// Raw mini-sector codes for sector 3
    pub segments_sector_3: Vec<Option<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_an_upstream_lap_payload() {
        let json = r#"{
            "meeting_key": 1219,
            "session_key": 9158,
            "driver_number": 63,
            "lap_number": 8,
            "lap_duration": 92.401,
            "is_pit_out_lap": false,
            "duration_sector_1": 26.1,
            "duration_sector_2": 38.2,
            "duration_sector_3": 28.101,
            "i1_speed": 307.0,
            "i2_speed": 277.0,
            "st_speed": 298.0,
            "date_start": "2023-09-16T13:59:07.606000+00:00",
            "segments_sector_1": [2049, 2049, 2051],
            "segments_sector_2": [2048, null],
            "segments_sector_3": [2049]
        }"#;

        let lap: Lap = serde_json::from_str(json).unwrap();
        assert_eq!(lap.lap_number, 8);
        assert_eq!(lap.lap_duration, Some(92.401));
        assert_eq!(lap.segments_sector_2, vec![Some(2048), None]);
    }

    #[test]
    fn missing_fields_default_rather_than_fail() {
        let lap: Lap = serde_json::from_str(r#"{"lap_number": 1}"#).unwrap();
        assert_eq!(lap.lap_number, 1);
        assert_eq!(lap.lap_duration, None);
        assert!(!lap.is_pit_out_lap);
        assert!(lap.segments_sector_1.is_empty());
    }
}
