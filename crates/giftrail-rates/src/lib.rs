//! # giftrail-rates
//!
//! **Rate resolution plane**: always produce a usable BTC/USDT rate with
//! explicit provenance, no matter what the network does.
//!
//! ## Architecture
//!
//! The resolver walks a strict fallback chain, first success wins:
//!
//! ```text
//! RateResolver::resolve()
//!     → primary provider   (bounded call)   → Primary
//!     → secondary provider (bounded call)   → Secondary
//!     → RateCache::read()                   → Cached / CachedStale
//!     → RateConfig::fallback_rate           → Fallback
//! ```
//!
//! `resolve()` is infallible — every branch ends in a tagged
//! [`RateSnapshot`](giftrail_types::RateSnapshot); callers read the
//! `provenance` tag, not a `Result`. [`RateFeed`] adds the session-level
//! policy on top: `Loading` until the first value lands, then
//! stale-while-revalidate with last-resolution-wins.

pub mod cache;
pub mod feed;
pub mod provider;
pub mod resolver;
pub mod retry;

pub use cache::RateCache;
pub use feed::RateFeed;
pub use provider::{BinanceProvider, CoinGeckoProvider, RateProvider, http_client};
pub use resolver::RateResolver;
pub use retry::{RetryPolicy, SingleAttempt};
