//! HTTP client for the OpenF1 timing API.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::filters::{
    DriverFilter, LapFilter, MeetingFilter, ResultFilter, SessionFilter, StintFilter, query_pairs,
};
use super::TimingSource;
use crate::config::PaddockConfig;
use crate::error::Result;
use crate::records::{Driver, Lap, Meeting, Session, SessionResult, Stint};

/// Timing source backed by the OpenF1 REST API.
///
/// Each endpoint returns a JSON array of records. Requests carry the
/// configured timeout and are never retried here; transient failures
/// surface as `Upstream` errors for the caller to handle.
#[derive(Debug, Clone)]
pub struct OpenF1Client {
    http: reqwest::Client,
    base_url: String,
}

impl OpenF1Client {
    /// Build a client from the given configuration.
    pub fn new(config: &PaddockConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("paddock/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let params_display = Value::Object(params.clone());
        debug!(endpoint, params = %params_display, "fetching upstream records");

        let response = self.http.get(&url).query(&query_pairs(params)).send().await?;
        let records: Vec<T> = response.error_for_status()?.json().await?;

        debug!(endpoint, count = records.len(), "upstream fetch complete");
        Ok(records)
    }
}

#[async_trait::async_trait]
impl TimingSource for OpenF1Client {
    async fn meetings(&self, filter: &MeetingFilter) -> Result<Vec<Meeting>> {
        self.fetch("meetings", &filter.params()).await
    }

    async fn sessions(&self, filter: &SessionFilter) -> Result<Vec<Session>> {
        self.fetch("sessions", &filter.params()).await
    }

    async fn session_results(&self, filter: &ResultFilter) -> Result<Vec<SessionResult>> {
        self.fetch("session_result", &filter.params()).await
    }

    async fn drivers(&self, filter: &DriverFilter) -> Result<Vec<Driver>> {
        filter.validate()?;
        self.fetch("drivers", &filter.params()).await
    }

    async fn laps(&self, filter: &LapFilter) -> Result<Vec<Lap>> {
        self.fetch("laps", &filter.params()).await
    }

    async fn stints(&self, filter: &StintFilter) -> Result<Vec<Stint>> {
        self.fetch("stints", &filter.params()).await
    }
}
