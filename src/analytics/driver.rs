//! Driver/session analytics assembly.
//!
//! [`AnalyticsEngine`] orchestrates one report per request: resolve the
//! session, resolve the driver, retrieve laps and stints, then run the pure
//! classification and aggregation passes and compose the result. Lookups
//! fail the whole request; there is no partial-result mode.

use tracing::debug;

use super::laps::{best_lap, classify, valid_laps};
use super::report::{DriverSessionAnalytics, DriverSummary, LapAnalytics, SessionSummary};
use super::stints::aggregate;
use crate::client::{DriverFilter, LapFilter, SessionFilter, StintFilter, TimingSource};
use crate::error::{PaddockError, Result};

/// Selection criteria for one driver/session analytics report.
///
/// The session can be pinned directly by `session_key`, or narrowed by the
/// year/meeting/country/type/name filters and then selected by exact
/// `session_key` or `session_name` match — whichever matches first.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DriverSessionQuery {
    /// Championship year
    pub year: i32,
    pub meeting_key: Option<u32>,
    pub country_name: Option<String>,
    pub session_type: Option<String>,
    pub session_name: Option<String>,
    pub session_key: Option<u32>,
    /// Car number of the driver
    pub driver_number: u32,
}

/// Assembles driver/session analytics reports from a timing source.
///
/// The engine owns its source; wrap the source in
/// [`crate::client::Cached`] before construction to memoize lookups.
/// Concurrent reports may share one engine — assembly holds no mutable
/// state.
#[derive(Debug)]
pub struct AnalyticsEngine<S> {
    source: S,
}

impl<S: TimingSource> AnalyticsEngine<S> {
    /// Create an engine over the given timing source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying timing source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Assemble the analytics report for one driver in one session.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no session matches the query's selection
    /// predicate, or when the driver did not participate in the resolved
    /// session. Upstream failures propagate unchanged; nothing is retried.
    pub async fn driver_session(
        &self,
        query: &DriverSessionQuery,
    ) -> Result<DriverSessionAnalytics> {
        let sessions = self
            .source
            .sessions(&SessionFilter {
                year: Some(query.year),
                meeting_key: query.meeting_key,
                country_name: query.country_name.clone(),
                session_type: query.session_type.clone(),
                session_name: query.session_name.clone(),
            })
            .await?;

        let session = sessions
            .iter()
            .find(|s| {
                query.session_key == Some(s.session_key)
                    || query.session_name.as_deref() == Some(s.session_name.as_str())
            })
            .ok_or_else(|| {
                PaddockError::session_not_found(match query.session_key {
                    Some(key) => format!("session {key} not found"),
                    None => format!(
                        "no session named {:?} matched the query",
                        query.session_name.as_deref().unwrap_or("<unset>")
                    ),
                })
            })?;
        // Pin the resolved key; the query may have selected by name only.
        let session_key = session.session_key;
        debug!(session_key, session_name = %session.session_name, "session resolved");

        let drivers = self
            .source
            .drivers(&DriverFilter {
                session_key: Some(session_key),
                driver_number: Some(query.driver_number),
                ..Default::default()
            })
            .await?;
        let driver = drivers.first().ok_or_else(|| {
            PaddockError::driver_not_found(format!(
                "driver #{} did not participate in session {session_key}",
                query.driver_number
            ))
        })?;
        debug!(driver_number = driver.driver_number, "driver resolved");

        // Laps and stints only depend on the resolved session/driver pair,
        // so the fetches are issued concurrently.
        let lap_filter = LapFilter {
            session_key,
            driver_number: Some(query.driver_number),
            lap_number: None,
        };
        let stint_filter = StintFilter {
            session_key,
            driver_number: Some(query.driver_number),
        };
        let (laps, stints) = tokio::try_join!(
            self.source.laps(&lap_filter),
            self.source.stints(&stint_filter),
        )?;
        debug!(laps = laps.len(), stints = stints.len(), "telemetry retrieved");

        let lap_reports = classify(&laps);
        let best = best_lap(valid_laps(&laps));
        let best_lap_report = best
            .and_then(|lap| lap_reports.iter().find(|r| r.lap_number == lap.lap_number))
            .cloned()
            .unwrap_or_else(LapAnalytics::default);

        Ok(DriverSessionAnalytics {
            session: SessionSummary::from(session),
            driver: DriverSummary::from(driver),
            laps: lap_reports,
            best_lap: best_lap_report,
            stints: aggregate(&stints, &laps),
            pit_stops: Vec::new(),
        })
    }
}
