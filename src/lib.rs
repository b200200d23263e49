//! Type-safe Rust client and analytics engine for Formula 1 timing data.
//!
//! Paddock fetches sessions, drivers, laps, and tyre stints from the
//! OpenF1 timing API and derives per-driver session analytics from them:
//! lap validity and outlier flags, per-stint pace, consistency, and tyre
//! degradation trends.
//!
//! # Features
//!
//! - **Typed records**: every upstream payload is validated into typed
//!   records at the retrieval boundary
//! - **Response memoization**: fetches are keyed deterministically and
//!   cached with a configurable TTL
//! - **Pure analytics**: classification and aggregation are synchronous
//!   and side-effect free, easy to test in isolation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paddock::{DriverSessionQuery, Paddock, PaddockConfig};
//!
//! #[tokio::main]
//! async fn main() -> paddock::Result<()> {
//!     let engine = Paddock::engine(PaddockConfig::default())?;
//!
//!     let report = engine
//!         .driver_session(&DriverSessionQuery {
//!             year: 2023,
//!             country_name: Some("Singapore".to_string()),
//!             session_name: Some("Race".to_string()),
//!             driver_number: 55,
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("best lap: {:?}", report.best_lap.lap_duration);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

// Core types and error handling
pub mod analytics;
pub mod cache;
pub mod client;
mod config;
mod error;
pub mod records;

// Core exports
pub use analytics::{
    AnalyticsEngine, DriverSessionAnalytics, DriverSessionQuery, DriverSummary, LapAnalytics,
    PitStopAnalytics, SegmentStatus, SessionSummary, StintAnalytics,
};
pub use cache::{CacheEntry, TtlCache, cache_key};
pub use client::{
    Cached, DriverFilter, LapFilter, MeetingFilter, OpenF1Client, ResultFilter, SessionFilter,
    StintFilter, TimingSource,
};
pub use config::{OPENF1_BASE_URL, PaddockConfig};
pub use error::{PaddockError, Result};

/// Unified entry point for building a configured analytics engine.
///
/// Wires the standard stack: an [`OpenF1Client`] wrapped in a [`Cached`]
/// memoization layer feeding an [`AnalyticsEngine`]. For custom stacks
/// (test doubles, alternative sources, a shared cache) construct the
/// pieces directly — every layer is public.
///
/// # Example
///
/// ```rust,no_run
/// use paddock::{Paddock, PaddockConfig};
/// use std::time::Duration;
///
/// # fn main() -> paddock::Result<()> {
/// let config = PaddockConfig::default().with_cache_ttl(Duration::from_secs(3600));
/// let engine = Paddock::engine(config)?;
/// # Ok(())
/// # }
/// ```
pub struct Paddock;

impl Paddock {
    /// Build an engine over a cached OpenF1 client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn engine(config: PaddockConfig) -> Result<AnalyticsEngine<Cached<OpenF1Client>>> {
        let client = OpenF1Client::new(&config)?;
        let cached = Cached::new(client, Arc::new(TtlCache::new()), config.cache_ttl);
        Ok(AnalyticsEngine::new(cached))
    }
}
