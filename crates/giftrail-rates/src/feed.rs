//! Session-level rate feed.
//!
//! The feed layers the caller-facing policy over the resolver: `Loading`
//! until the first resolution of the session lands, then
//! stale-while-revalidate — the last resolved value keeps serving while a
//! newer resolution is in flight, and a late-arriving older result is
//! discarded by timestamp (last-resolution-wins).

use std::sync::{Arc, PoisonError, RwLock};

use giftrail_types::{RateConfig, RateProvenance, RateSnapshot};

use crate::resolver::RateResolver;

/// Shared handle serving the session's current snapshot.
#[derive(Clone)]
pub struct RateFeed {
    resolver: Arc<RateResolver>,
    latest: Arc<RwLock<Option<RateSnapshot>>>,
    config: RateConfig,
}

impl RateFeed {
    #[must_use]
    pub fn new(resolver: Arc<RateResolver>, config: RateConfig) -> Self {
        Self {
            resolver,
            latest: Arc::new(RwLock::new(None)),
            config,
        }
    }

    /// Current snapshot. Before any resolution has landed this session,
    /// reports the fallback rate tagged `Loading`; afterwards always the
    /// last resolved value, whatever is currently in flight.
    #[must_use]
    pub fn snapshot(&self) -> RateSnapshot {
        let guard = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        guard.unwrap_or_else(|| RateSnapshot::new(self.config.fallback_rate, RateProvenance::Loading))
    }

    /// Run one resolution cycle and return the snapshot now being served
    /// (which is the existing one if a newer resolution landed meanwhile).
    pub async fn refresh(&self) -> RateSnapshot {
        let resolved = self.resolver.resolve().await;
        self.install(resolved)
    }

    /// Drive periodic refresh at the configured interval. The first tick
    /// fires immediately; spawn this alongside event-driven `refresh()`
    /// calls (window focus, network reconnect). Never returns.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.config.refresh_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.refresh().await;
        }
    }

    fn install(&self, resolved: RateSnapshot) -> RateSnapshot {
        let mut guard = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        match *guard {
            Some(current) if resolved.timestamp < current.timestamp => {
                tracing::debug!(
                    discarded = resolved.rate,
                    kept = current.rate,
                    "Discarding late resolution older than the installed snapshot"
                );
                current
            }
            _ => {
                *guard = Some(resolved);
                resolved
            }
        }
    }
}
