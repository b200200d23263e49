//! Derived analytics over raw timing records.
//!
//! The pipeline turns a flat stream of per-lap telemetry into classified,
//! aggregated, per-driver, per-session reports:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 Analytics Pipeline                     │
//! │                                                        │
//! │  session lookup ──► driver lookup ──► laps + stints    │
//! │                                          │             │
//! │                                          ▼             │
//! │       lap classification (validity, outliers)          │
//! │                                          │             │
//! │                                          ▼             │
//! │       stint aggregation (best/avg/σ/degradation)       │
//! │                                          │             │
//! │                                          ▼             │
//! │              DriverSessionAnalytics report             │
//! │                                                        │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! All classification and aggregation math is pure and synchronous; only
//! the lookups in [`AnalyticsEngine`] touch a [`crate::client::TimingSource`].

pub mod driver;
pub mod laps;
mod report;
pub mod stints;

pub use driver::{AnalyticsEngine, DriverSessionQuery};
pub use laps::{best_lap, classify};
pub use report::{
    DriverSessionAnalytics, DriverSummary, LapAnalytics, PitStopAnalytics, SegmentStatus,
    SessionSummary, StintAnalytics,
};
pub use stints::aggregate;
