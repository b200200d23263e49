//! Response memoization for upstream timing requests.
//!
//! Every fetch against the timing API is keyed by a deterministic digest of
//! its endpoint and filter parameters ([`cache_key`]) and memoized in a
//! TTL-bounded store ([`TtlCache`]). Expiry is checked lazily on access;
//! there is no sweeping timer.
//!
//! The store is safe to share across concurrent requests. Population is
//! at-least-once: two tasks that miss the same key at the same time will
//! both invoke their producer, and the later write wins. See
//! [`TtlCache::get_or_populate`].

mod key;
mod store;

pub use key::cache_key;
pub use store::{CacheEntry, TtlCache};
