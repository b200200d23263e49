//! Memoizing decorator for any timing source.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::TimingSource;
use super::filters::{
    DriverFilter, LapFilter, MeetingFilter, ResultFilter, SessionFilter, StintFilter,
};
use crate::cache::{TtlCache, cache_key};
use crate::error::{PaddockError, Result};
use crate::records::{Driver, Lap, Meeting, Session, SessionResult, Stint};

/// Wraps a [`TimingSource`] with TTL memoization.
///
/// Every fetch is keyed by its endpoint name and canonicalized filter
/// parameters, so identical queries within the TTL window hit the store
/// instead of the wire. The store is injected, not ambient: share one
/// [`TtlCache`] across as many wrapped sources as should share responses.
///
/// Population inherits the store's relaxed guarantee — concurrent identical
/// misses may each reach upstream once.
#[derive(Debug)]
pub struct Cached<S> {
    source: S,
    store: Arc<TtlCache>,
    ttl_ms: i64,
}

impl<S> Cached<S> {
    /// Wrap `source`, memoizing responses in `store` for `ttl`.
    pub fn new(source: S, store: Arc<TtlCache>, ttl: Duration) -> Self {
        Self { source, store, ttl_ms: ttl.as_millis() as i64 }
    }

    /// The shared response store.
    pub fn store(&self) -> &TtlCache {
        &self.store
    }

    /// Unwrap the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Run one fetch through the store: typed records are stored as their
    /// opaque JSON shape and re-typed on the way out.
    async fn through<T, F, Fut>(
        &self,
        prefix: &str,
        params: &Map<String, Value>,
        fetch: F,
    ) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let key = cache_key(prefix, params);
        let payload = self
            .store
            .get_or_populate(&key, self.ttl_ms, || async {
                let records = fetch().await?;
                serde_json::to_value(&records)
                    .map_err(|e| PaddockError::decode(prefix.to_string(), e.to_string()))
            })
            .await?;

        serde_json::from_value(payload)
            .map_err(|e| PaddockError::decode(prefix.to_string(), e.to_string()))
    }
}

#[async_trait::async_trait]
impl<S: TimingSource> TimingSource for Cached<S> {
    async fn meetings(&self, filter: &MeetingFilter) -> Result<Vec<Meeting>> {
        self.through("meetings", &filter.params(), || self.source.meetings(filter)).await
    }

    async fn sessions(&self, filter: &SessionFilter) -> Result<Vec<Session>> {
        self.through("sessions", &filter.params(), || self.source.sessions(filter)).await
    }

    async fn session_results(&self, filter: &ResultFilter) -> Result<Vec<SessionResult>> {
        self.through("session_result", &filter.params(), || self.source.session_results(filter))
            .await
    }

    async fn drivers(&self, filter: &DriverFilter) -> Result<Vec<Driver>> {
        self.through("drivers", &filter.params(), || self.source.drivers(filter)).await
    }

    async fn laps(&self, filter: &LapFilter) -> Result<Vec<Lap>> {
        self.through("laps", &filter.params(), || self.source.laps(filter)).await
    }

    async fn stints(&self, filter: &StintFilter) -> Result<Vec<Stint>> {
        self.through("stints", &filter.params(), || self.source.stints(filter)).await
    }
}
