//! The retry-policy seam between the resolver and its providers.
//!
//! The shipped policy performs exactly one bounded attempt per provider —
//! the resolver's tiered fallback is the retry story, and periodic
//! re-resolution supplies the cadence. The seam exists so a backoff or
//! multi-attempt policy can be substituted without touching the resolver's
//! fallback ordering.

use std::time::Duration;

use async_trait::async_trait;

use giftrail_types::{GiftrailError, Result};

use crate::provider::RateProvider;

/// How a single provider is attempted within the fallback chain.
#[async_trait]
pub trait RetryPolicy: Send + Sync {
    /// Attempt `provider` under `timeout`, returning its validated rate.
    async fn fetch(&self, provider: &dyn RateProvider, timeout: Duration) -> Result<f64>;
}

/// One bounded attempt, no backoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleAttempt;

#[async_trait]
impl RetryPolicy for SingleAttempt {
    async fn fetch(&self, provider: &dyn RateProvider, timeout: Duration) -> Result<f64> {
        match tokio::time::timeout(timeout, provider.fetch_rate()).await {
            Ok(result) => result,
            Err(_) => Err(GiftrailError::ProviderTimeout {
                provider: provider.name(),
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}
