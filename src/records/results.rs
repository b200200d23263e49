//! Session result records

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A driver's classified result for one session.
///
/// `duration` and `gap_to_leader` are union-typed upstream: a number for
/// plain sessions, an array of numbers for multi-part qualifying, or a
/// string like "+1 LAP" for lapped cars. They are carried through as raw
/// JSON values; this crate does not interpret them.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionResult {
    /// Did not finish
    pub dnf: bool,
    /// Did not start
    pub dns: bool,
    /// Disqualified
    pub dsq: bool,
    pub driver_number: u32,
    pub duration: Option<Value>,
    pub gap_to_leader: Option<Value>,
    pub number_of_laps: Option<u32>,
    pub meeting_key: u32,
    /// Final classified position; absent for unclassified entries
    pub position: Option<u32>,
    /// Championship points awarded, race sessions only
    pub points: Option<f64>,
    pub session_key: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_race_result() {
        let json = r#"{
            "dnf": false,
            "dns": false,
            "dsq": false,
            "driver_number": 55,
            "duration": 5636.736,
            "gap_to_leader": 0,
            "number_of_laps": 62,
            "meeting_key": 1219,
            "position": 1,
            "points": 25,
            "session_key": 9165
        }"#;

        let result: SessionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.position, Some(1));
        assert_eq!(result.points, Some(25.0));
        assert_eq!(result.duration, Some(json!(5636.736)));
    }

    #[test]
    fn union_typed_fields_pass_through_unparsed() {
        let json = r#"{
            "driver_number": 81,
            "duration": [89.2, 88.9, 88.1],
            "gap_to_leader": "+1 LAP",
            "meeting_key": 1219,
            "session_key": 9158
        }"#;

        let result: SessionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.duration, Some(json!([89.2, 88.9, 88.1])));
        assert_eq!(result.gap_to_leader, Some(json!("+1 LAP")));
        assert_eq!(result.position, None);
    }
}
