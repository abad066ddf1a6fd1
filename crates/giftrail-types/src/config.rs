//! Configuration for the GiftRail resilience core.
//!
//! Both configs are plain data with defaults drawn from [`constants`]; the
//! composition root constructs them once and injects them alongside the
//! backing store. The fallback rate and provider ordering are configuration
//! here, not hardcoded at their use sites.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for rate resolution and caching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateConfig {
    /// Hardcoded last-resort rate (USDT per BTC).
    pub fallback_rate: f64,
    /// Age at which a cached rate is flagged stale (it is still served).
    pub stale_after: Duration,
    /// Bound on each individual provider call.
    pub provider_timeout: Duration,
    /// Interval between periodic re-resolutions.
    pub refresh_interval: Duration,
    /// Backing-store key for the cached rate.
    pub cache_key: String,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            fallback_rate: constants::DEFAULT_FALLBACK_RATE,
            stale_after: Duration::from_millis(constants::DEFAULT_STALE_AFTER_MS),
            provider_timeout: Duration::from_millis(constants::DEFAULT_PROVIDER_TIMEOUT_MS),
            refresh_interval: Duration::from_millis(constants::DEFAULT_REFRESH_INTERVAL_MS),
            cache_key: constants::RATE_CACHE_KEY.to_string(),
        }
    }
}

/// Configuration for the order-history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum entries retained (most recently seen first).
    pub max_entries: usize,
    /// Backing-store key for the history array.
    pub storage_key: String,
    /// Throwaway key used to probe store availability.
    pub probe_key: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: constants::DEFAULT_MAX_HISTORY_ENTRIES,
            storage_key: constants::HISTORY_STORAGE_KEY.to_string(),
            probe_key: constants::HISTORY_PROBE_KEY.to_string(),
        }
    }
}
