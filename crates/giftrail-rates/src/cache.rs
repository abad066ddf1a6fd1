//! Persisted last-known-good rate.
//!
//! The cache is the third tier of the fallback chain. Neither `read` nor
//! `write` can fail: a throwing backing store or a corrupted payload
//! degrades to "no cache entry" with a logged warning. Staleness is
//! informational — the cache never deletes on age, only on overwrite.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use giftrail_store::KvStore;
use giftrail_types::{RateConfig, RateProvenance, RateSnapshot, is_valid_rate};

/// Persisted wire form of a cache entry: rate, epoch-ms timestamp, and the
/// provenance the value had when written.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedRate {
    rate: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    timestamp: DateTime<Utc>,
    provenance: RateProvenance,
}

/// Rate cache over an injected backing store.
pub struct RateCache {
    store: Arc<dyn KvStore>,
    key: String,
    stale_after: Duration,
}

impl RateCache {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>, config: &RateConfig) -> Self {
        Self {
            store,
            key: config.cache_key.clone(),
            stale_after: config.stale_after,
        }
    }

    /// Read the cached rate, classified fresh/stale as of now.
    #[must_use]
    pub fn read(&self) -> Option<RateSnapshot> {
        self.read_at(Utc::now())
    }

    /// Read the cached rate, classified fresh/stale as of `now`.
    #[must_use]
    pub fn read_at(&self, now: DateTime<Utc>) -> Option<RateSnapshot> {
        let payload = match self.store.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Rate cache read failed");
                return None;
            }
        };

        let cached: CachedRate = match serde_json::from_str(&payload) {
            Ok(cached) => cached,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Discarding corrupted rate cache entry");
                return None;
            }
        };

        if !is_valid_rate(cached.rate) {
            tracing::warn!(rate = cached.rate, "Discarding cached rate with invalid value");
            return None;
        }

        let provenance = classify_age(now.signed_duration_since(cached.timestamp), self.stale_after);
        Some(RateSnapshot::at(cached.rate, cached.timestamp, provenance))
    }

    /// Persist a snapshot as the new last-known-good rate. Best-effort.
    pub fn write(&self, snapshot: &RateSnapshot) {
        let entry = CachedRate {
            rate: snapshot.rate,
            timestamp: snapshot.timestamp,
            provenance: snapshot.provenance,
        };
        let payload = match serde_json::to_string(&entry) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to encode rate cache entry");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &payload) {
            tracing::warn!(key = %self.key, error = %err, "Rate cache write failed");
        }
    }
}

/// Pure staleness classification: age at or past the threshold is stale,
/// strictly below is fresh. Negative ages (clock skew) count as fresh.
fn classify_age(age: chrono::Duration, stale_after: Duration) -> RateProvenance {
    let threshold = chrono::Duration::from_std(stale_after).unwrap_or(chrono::Duration::MAX);
    if age >= threshold {
        RateProvenance::CachedStale
    } else {
        RateProvenance::Cached
    }
}
