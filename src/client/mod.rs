//! Retrieval layer for the timing API.
//!
//! [`TimingSource`] is the seam between the analytics engine and the
//! outside world: one fetch per entity type, each taking a typed filter and
//! returning typed records. [`OpenF1Client`] implements it over HTTP;
//! [`Cached`] wraps any source with TTL memoization. The analytics engine
//! only ever sees the trait.

mod cached;
mod filters;
mod openf1;

pub use cached::Cached;
pub use filters::{
    DriverFilter, LapFilter, MeetingFilter, ResultFilter, SessionFilter, StintFilter,
};
pub use openf1::OpenF1Client;

use crate::Result;
use crate::records::{Driver, Lap, Meeting, Session, SessionResult, Stint};

/// Trait for timing data sources.
///
/// Implementations fetch the records matching a filter; they perform no
/// analytics. Errors are surfaced to the caller unmodified — no retries
/// happen at this seam.
#[async_trait::async_trait]
pub trait TimingSource: Send + Sync {
    /// Fetch meetings (Grand Prix or testing weekends).
    async fn meetings(&self, filter: &MeetingFilter) -> Result<Vec<Meeting>>;

    /// Fetch sessions (practice, qualifying, race runs).
    async fn sessions(&self, filter: &SessionFilter) -> Result<Vec<Session>>;

    /// Fetch classified results for a session.
    async fn session_results(&self, filter: &ResultFilter) -> Result<Vec<SessionResult>>;

    /// Fetch the drivers participating in a session or meeting.
    ///
    /// Fails with `InvalidFilter` when the filter carries no parameters at
    /// all; the upstream endpoint rejects unbounded queries.
    async fn drivers(&self, filter: &DriverFilter) -> Result<Vec<Driver>>;

    /// Fetch per-lap timing for a session.
    async fn laps(&self, filter: &LapFilter) -> Result<Vec<Lap>>;

    /// Fetch tyre stints for a session.
    async fn stints(&self, filter: &StintFilter) -> Result<Vec<Stint>>;
}
