//! The tiered rate resolver.
//!
//! `resolve()` never fails and never blocks past the sum of the bounded
//! provider calls: providers in order, then the cache (stale entries
//! included), then the configured constant. Callers learn which tier
//! answered through the snapshot's provenance tag.

use giftrail_types::{RateConfig, RateProvenance, RateSnapshot, is_valid_rate};

use crate::cache::RateCache;
use crate::provider::RateProvider;
use crate::retry::{RetryPolicy, SingleAttempt};

/// Orchestrates providers → cache → constant into one infallible call.
pub struct RateResolver {
    providers: Vec<Box<dyn RateProvider>>,
    cache: RateCache,
    policy: Box<dyn RetryPolicy>,
    config: RateConfig,
}

impl RateResolver {
    /// Resolver with the default single-attempt policy. Provider order is
    /// the fallback order: index 0 is the primary source, every later
    /// provider resolves as `Secondary`.
    #[must_use]
    pub fn new(providers: Vec<Box<dyn RateProvider>>, cache: RateCache, config: RateConfig) -> Self {
        Self::with_policy(providers, cache, config, Box::new(SingleAttempt))
    }

    /// Resolver with a substituted retry policy. The fallback ordering is
    /// unaffected by the policy.
    #[must_use]
    pub fn with_policy(
        providers: Vec<Box<dyn RateProvider>>,
        cache: RateCache,
        config: RateConfig,
        policy: Box<dyn RetryPolicy>,
    ) -> Self {
        Self {
            providers,
            cache,
            policy,
            config,
        }
    }

    /// Resolve the current rate. Infallible; see the module docs for the
    /// tier ordering.
    pub async fn resolve(&self) -> RateSnapshot {
        for (index, provider) in self.providers.iter().enumerate() {
            match self
                .policy
                .fetch(provider.as_ref(), self.config.provider_timeout)
                .await
            {
                Ok(rate) if is_valid_rate(rate) => {
                    let provenance = if index == 0 {
                        RateProvenance::Primary
                    } else {
                        RateProvenance::Secondary
                    };
                    let snapshot = RateSnapshot::new(rate, provenance);
                    self.cache.write(&snapshot);
                    tracing::debug!(
                        provider = provider.name(),
                        rate,
                        provenance = %provenance,
                        "Rate resolved from live provider"
                    );
                    return snapshot;
                }
                Ok(rate) => {
                    tracing::warn!(
                        provider = provider.name(),
                        rate,
                        "Provider returned invalid rate; falling through"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %err,
                        "Provider failed; falling through"
                    );
                }
            }
        }

        if let Some(snapshot) = self.cache.read() {
            tracing::info!(
                rate = snapshot.rate,
                provenance = %snapshot.provenance,
                "All providers failed; serving cached rate"
            );
            return snapshot;
        }

        tracing::warn!(
            fallback = self.config.fallback_rate,
            "All providers and cache failed; serving fallback constant"
        );
        RateSnapshot::new(self.config.fallback_rate, RateProvenance::Fallback)
    }
}
