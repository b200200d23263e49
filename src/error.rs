//! Error types for timing retrieval and analytics.
//!
//! All errors implement the `std::error::Error` trait and carry enough
//! context to identify the failing lookup or upstream request.
//!
//! ## Error Categories
//!
//! - **NotFound**: a session or driver the caller asked for does not exist
//!   or did not participate
//! - **Upstream Errors**: the timing API request failed; propagated as-is,
//!   never retried or wrapped by the analytics core
//! - **Filter Errors**: a retrieval filter that cannot be sent upstream
//!   (e.g. no parameters at all)
//! - **Decode Errors**: an upstream payload that does not match the typed
//!   record it claims to be
//!
//! ## Recovery
//!
//! A failed lookup aborts the whole assembly; there is no partial-result
//! mode. [`PaddockError::is_retryable`] distinguishes transient upstream
//! failures from terminal ones:
//!
//! ```rust
//! use paddock::PaddockError;
//!
//! let error = PaddockError::session_not_found("session 9158 not found");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Result type alias for timing and analytics operations.
pub type Result<T, E = PaddockError> = std::result::Result<T, E>;

/// Main error type for timing and analytics operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PaddockError {
    #[error("{entity} not found: {detail}")]
    NotFound { entity: &'static str, detail: String },

    #[error("Upstream request failed: {context}")]
    Upstream {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid filter: {reason}")]
    InvalidFilter { reason: String },

    #[error("Decode error in {context}: {details}")]
    Decode { context: String, details: String },
}

impl PaddockError {
    /// Returns whether this error is potentially recoverable through retry.
    ///
    /// The crate itself never retries; this is a hint for the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            PaddockError::Upstream { .. } => true,
            PaddockError::NotFound { .. } => false,
            PaddockError::InvalidFilter { .. } => false,
            PaddockError::Decode { .. } => false,
        }
    }

    /// Helper constructor for a session that matched no selection predicate.
    pub fn session_not_found(detail: impl Into<String>) -> Self {
        PaddockError::NotFound { entity: "session", detail: detail.into() }
    }

    /// Helper constructor for a driver that did not participate.
    pub fn driver_not_found(detail: impl Into<String>) -> Self {
        PaddockError::NotFound { entity: "driver", detail: detail.into() }
    }

    /// Helper constructor for upstream request failures.
    pub fn upstream(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PaddockError::Upstream { context: context.into(), source: Box::new(source) }
    }

    /// Helper constructor for filter validation failures.
    pub fn invalid_filter(reason: impl Into<String>) -> Self {
        PaddockError::InvalidFilter { reason: reason.into() }
    }

    /// Helper constructor for payload decode failures.
    pub fn decode(context: impl Into<String>, details: impl Into<String>) -> Self {
        PaddockError::Decode { context: context.into(), details: details.into() }
    }
}

impl From<reqwest::Error> for PaddockError {
    fn from(err: reqwest::Error) -> Self {
        let context =
            err.url().map(|u| u.to_string()).unwrap_or_else(|| "<unknown url>".to_string());
        PaddockError::Upstream { context, source: Box::new(err) }
    }
}
