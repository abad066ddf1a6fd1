//! Exchange-rate snapshot and provenance model.
//!
//! Every resolved rate carries a [`RateProvenance`] tag naming the fallback
//! tier that produced it. Callers distinguish trust levels through the tag,
//! never through errors — `resolve()` is infallible by contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which tier of the fallback chain produced a rate.
///
/// Ordered by trust: a live provider beats the cache, a fresh cache entry
/// beats a stale one, and the hardcoded constant is the last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateProvenance {
    /// Live value from the primary provider.
    Primary,
    /// Live value from a secondary provider.
    Secondary,
    /// Cached value younger than the staleness threshold.
    Cached,
    /// Cached value at or past the staleness threshold — still served,
    /// a stale real rate beats a context-free constant.
    CachedStale,
    /// The hardcoded fallback constant; nothing else was available.
    Fallback,
    /// A resolution is in flight and no value has landed this session.
    Loading,
}

impl RateProvenance {
    /// True when the value came from a live provider call.
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary)
    }

    /// True when the value was read back from the persisted cache.
    #[must_use]
    pub fn is_cached(self) -> bool {
        matches!(self, Self::Cached | Self::CachedStale)
    }

    /// True when the UI should render a low-confidence warning indicator.
    #[must_use]
    pub fn needs_warning(self) -> bool {
        matches!(self, Self::Fallback | Self::CachedStale)
    }

    /// User-facing status message for the rate indicator.
    #[must_use]
    pub fn status_message(self) -> &'static str {
        match self {
            Self::Primary => "Live from primary source",
            Self::Secondary => "Live from secondary source",
            Self::Cached => "Cached rate",
            Self::CachedStale => "Cached rate (stale)",
            Self::Fallback => "Rate unavailable",
            Self::Loading => "Loading BTC price…",
        }
    }

    /// Short label for ticker display.
    #[must_use]
    pub fn ticker_label(self) -> &'static str {
        match self {
            Self::Primary | Self::Secondary => "Live",
            Self::Cached => "Cached",
            Self::CachedStale => "Cached (stale)",
            Self::Fallback => "Unavailable",
            Self::Loading => "Loading…",
        }
    }
}

impl std::fmt::Display for RateProvenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "PRIMARY"),
            Self::Secondary => write!(f, "SECONDARY"),
            Self::Cached => write!(f, "CACHED"),
            Self::CachedStale => write!(f, "CACHED_STALE"),
            Self::Fallback => write!(f, "FALLBACK"),
            Self::Loading => write!(f, "LOADING"),
        }
    }
}

/// A resolved exchange rate with its origin and observation time.
///
/// Invariant: `rate` is finite and positive whenever a snapshot is handed
/// to callers. Sources producing anything else are treated as failed and
/// never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Price of one BTC in USDT.
    pub rate: f64,
    /// When the value was obtained or last validated.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Fallback tier that produced the value.
    pub provenance: RateProvenance,
}

impl RateSnapshot {
    /// Snapshot observed now.
    #[must_use]
    pub fn new(rate: f64, provenance: RateProvenance) -> Self {
        Self {
            rate,
            timestamp: Utc::now(),
            provenance,
        }
    }

    /// Snapshot with an explicit observation time.
    #[must_use]
    pub fn at(rate: f64, timestamp: DateTime<Utc>, provenance: RateProvenance) -> Self {
        Self {
            rate,
            timestamp,
            provenance,
        }
    }

    /// Age of the snapshot relative to `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.timestamp)
    }
}

/// Whether a raw value is acceptable as an exchange rate.
///
/// Anything non-finite or not strictly positive is a provider failure.
#[must_use]
pub fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}
