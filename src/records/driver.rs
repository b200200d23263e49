//! Driver records

use serde::{Deserialize, Serialize};

/// A driver's participation in one session.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Driver {
    pub session_key: u32,
    pub meeting_key: u32,
    /// Car number, the driver's identity within a session
    pub driver_number: u32,
    /// Name used on broadcast graphics, e.g. "M VERSTAPPEN"
    pub broadcast_name: Option<String>,
    pub full_name: Option<String>,
    /// Three-letter acronym, e.g. "VER"
    pub name_acronym: Option<String>,
    pub team_name: Option<String>,
    /// Team colour as a hex code, without leading '#'
    pub team_colour: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headshot_url: Option<String>,
    pub country_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_an_upstream_driver_payload() {
        let json = r#"{
            "session_key": 9158,
            "meeting_key": 1219,
            "driver_number": 55,
            "broadcast_name": "C SAINZ",
            "full_name": "Carlos SAINZ",
            "name_acronym": "SAI",
            "team_name": "Ferrari",
            "team_colour": "F91536",
            "first_name": "Carlos",
            "last_name": "Sainz",
            "headshot_url": null,
            "country_code": "ESP"
        }"#;

        let driver: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(driver.driver_number, 55);
        assert_eq!(driver.name_acronym.as_deref(), Some("SAI"));
        assert_eq!(driver.headshot_url, None);
    }
}
