//! System-wide constants for the GiftRail resilience core.

/// Canonical hardcoded fallback rate (USDT per BTC), served only when every
/// provider and the cache have failed.
pub const DEFAULT_FALLBACK_RATE: f64 = 67_500.0;

/// Default maximum age of a cached rate before it is flagged stale (1 hour).
pub const DEFAULT_STALE_AFTER_MS: u64 = 3_600_000;

/// Default per-provider call timeout in milliseconds.
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 10_000;

/// Default interval between periodic rate re-resolutions.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Backing-store key for the persisted rate cache entry.
pub const RATE_CACHE_KEY: &str = "giftrail-btc-usdt-rate";

/// Maximum number of order-history entries retained (most recent first).
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 50;

/// Backing-store key for the persisted order-history array.
pub const HISTORY_STORAGE_KEY: &str = "giftrail-order-history";

/// Throwaway key written and removed to probe backing-store availability.
pub const HISTORY_PROBE_KEY: &str = "__giftrail_storage_probe__";

/// Fixed storefront discount applied to every gift-card purchase (50% off).
pub const DISCOUNT_RATE: f64 = 0.5;

/// Decimal places used when displaying BTC amounts.
pub const BASE_DISPLAY_PRECISION: usize = 8;

/// Base asset of the payment pair.
pub const BASE_ASSET: &str = "BTC";

/// Quote asset of the payment pair (gift cards are denominated in it).
pub const QUOTE_ASSET: &str = "USDT";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "GiftRail";
