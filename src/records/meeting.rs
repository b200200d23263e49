//! Meeting records
//!
//! A meeting is one race weekend (a Grand Prix or a testing event),
//! grouping multiple sessions.

use serde::{Deserialize, Serialize};

/// A meeting as reported by the timing API.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Meeting {
    pub circuit_key: u32,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: u32,
    pub country_name: String,
    /// UTC start of the first session, ISO 8601
    pub date_start: String,
    pub gmt_offset: String,
    pub location: String,
    /// Unique meeting identifier
    pub meeting_key: u32,
    /// Short name, e.g. "Singapore Grand Prix"
    pub meeting_name: String,
    /// Sponsored long-form name
    pub meeting_official_name: String,
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_an_upstream_meeting_payload() {
        let json = r#"{
            "circuit_key": 61,
            "circuit_short_name": "Singapore",
            "country_code": "SGP",
            "country_key": 157,
            "country_name": "Singapore",
            "date_start": "2023-09-15T09:30:00+00:00",
            "gmt_offset": "08:00:00",
            "location": "Marina Bay",
            "meeting_key": 1219,
            "meeting_name": "Singapore Grand Prix",
            "meeting_official_name": "FORMULA 1 SINGAPORE AIRLINES SINGAPORE GRAND PRIX 2023",
            "year": 2023
        }"#;

        let meeting: Meeting = serde_json::from_str(json).unwrap();
        assert_eq!(meeting.meeting_key, 1219);
        assert_eq!(meeting.year, 2023);
    }
}
