//! Per-entity retrieval filters.
//!
//! Each upstream endpoint accepts a different set of query parameters. The
//! structs here model them with `Option` fields; unset fields are omitted
//! from both the request query string and the cache key, so a caller that
//! never sets a field and one that explicitly leaves it unset produce the
//! same request.

use serde_json::{Map, Value};

use crate::error::{PaddockError, Result};

/// Filter for the meetings endpoint.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MeetingFilter {
    pub year: Option<i32>,
    pub country_name: Option<String>,
    pub circuit_short_name: Option<String>,
}

/// Filter for the sessions endpoint.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SessionFilter {
    pub year: Option<i32>,
    pub meeting_key: Option<u32>,
    pub country_name: Option<String>,
    pub session_type: Option<String>,
    pub session_name: Option<String>,
}

/// Filter for the session results endpoint.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ResultFilter {
    pub session_key: u32,
    pub driver_number: Option<u32>,
}

/// Filter for the drivers endpoint.
///
/// The endpoint rejects unfiltered queries; at least one field must be set.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DriverFilter {
    pub session_key: Option<u32>,
    pub meeting_key: Option<u32>,
    pub driver_number: Option<u32>,
}

/// Filter for the laps endpoint.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct LapFilter {
    pub session_key: u32,
    pub driver_number: Option<u32>,
    pub lap_number: Option<u32>,
}

/// Filter for the stints endpoint.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct StintFilter {
    pub session_key: u32,
    pub driver_number: Option<u32>,
}

fn insert_opt(params: &mut Map<String, Value>, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        params.insert(key.to_string(), value.into());
    }
}

impl MeetingFilter {
    /// Parameter mapping for the query string and the cache key.
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        insert_opt(&mut params, "year", self.year);
        insert_opt(&mut params, "country_name", self.country_name.clone());
        insert_opt(&mut params, "circuit_short_name", self.circuit_short_name.clone());
        params
    }
}

impl SessionFilter {
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        insert_opt(&mut params, "year", self.year);
        insert_opt(&mut params, "meeting_key", self.meeting_key);
        insert_opt(&mut params, "country_name", self.country_name.clone());
        insert_opt(&mut params, "session_type", self.session_type.clone());
        insert_opt(&mut params, "session_name", self.session_name.clone());
        params
    }
}

impl ResultFilter {
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("session_key".to_string(), self.session_key.into());
        insert_opt(&mut params, "driver_number", self.driver_number);
        params
    }
}

impl DriverFilter {
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        insert_opt(&mut params, "session_key", self.session_key);
        insert_opt(&mut params, "meeting_key", self.meeting_key);
        insert_opt(&mut params, "driver_number", self.driver_number);
        params
    }

    /// The drivers endpoint requires at least one filter parameter.
    pub fn validate(&self) -> Result<()> {
        if self.session_key.is_none() && self.meeting_key.is_none() && self.driver_number.is_none()
        {
            return Err(PaddockError::invalid_filter(
                "drivers query requires at least one of session_key, meeting_key, driver_number",
            ));
        }
        Ok(())
    }
}

impl LapFilter {
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("session_key".to_string(), self.session_key.into());
        insert_opt(&mut params, "driver_number", self.driver_number);
        insert_opt(&mut params, "lap_number", self.lap_number);
        params
    }
}

impl StintFilter {
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("session_key".to_string(), self.session_key.into());
        insert_opt(&mut params, "driver_number", self.driver_number);
        params
    }
}

/// Render a parameter mapping as query-string pairs.
pub(crate) fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
