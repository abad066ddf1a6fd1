//! Error types for the GiftRail resilience core.
//!
//! All errors use the `GR_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Rate provider errors
//! - 2xx: Backing-store errors
//! - 9xx: General / internal errors
//!
//! None of these errors cross the public boundary of the resilience
//! components — `resolve()`, the rate cache, the history store, and the
//! notifier all degrade internally and report through provenance tags or
//! safe defaults. The typed errors exist for the provider/store seams and
//! for the structured logs emitted at every swallow site.

use thiserror::Error;

/// Central error enum for all GiftRail operations.
#[derive(Debug, Error)]
pub enum GiftrailError {
    // =================================================================
    // Rate Provider Errors (1xx)
    // =================================================================
    /// The provider responded with a non-2xx HTTP status.
    #[error("GR_ERR_100: Provider {provider} returned HTTP {status}")]
    ProviderHttp { provider: &'static str, status: u16 },

    /// The provider call did not complete within its bounded timeout.
    #[error("GR_ERR_101: Provider {provider} timed out after {timeout_ms}ms")]
    ProviderTimeout {
        provider: &'static str,
        timeout_ms: u64,
    },

    /// The provider payload could not be decoded into a rate.
    #[error("GR_ERR_102: Provider {provider} returned a malformed payload: {reason}")]
    ProviderPayload {
        provider: &'static str,
        reason: String,
    },

    /// The provider returned a rate that is non-finite or not positive.
    #[error("GR_ERR_103: Provider {provider} returned invalid rate {value}")]
    InvalidRate { provider: &'static str, value: f64 },

    /// The request could not be sent or the response body could not be read.
    #[error("GR_ERR_104: Provider {provider} transport failure: {reason}")]
    ProviderTransport {
        provider: &'static str,
        reason: String,
    },

    // =================================================================
    // Backing-Store Errors (2xx)
    // =================================================================
    /// The backing store is absent or refused the operation outright.
    #[error("GR_ERR_200: Backing store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// A read against the backing store failed.
    #[error("GR_ERR_201: Backing store read of {key} failed: {reason}")]
    StoreRead { key: String, reason: String },

    /// A write against the backing store failed.
    #[error("GR_ERR_202: Backing store write of {key} failed: {reason}")]
    StoreWrite { key: String, reason: String },

    /// The store's quota would be exceeded by this write.
    #[error("GR_ERR_203: Store quota exceeded: need {needed} bytes, limit {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    /// A persisted payload failed structural validation.
    #[error("GR_ERR_204: Malformed persisted payload under {key}: {reason}")]
    MalformedPayload { key: String, reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("GR_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("GR_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config, bad base URL, etc.).
    #[error("GR_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (disk).
    #[error("GR_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GiftrailError>;

impl From<std::io::Error> for GiftrailError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GiftrailError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GiftrailError::ProviderHttp {
            provider: "coingecko",
            status: 503,
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("GR_ERR_100"), "Got: {msg}");
        assert!(msg.contains("503"));
    }

    #[test]
    fn timeout_display() {
        let err = GiftrailError::ProviderTimeout {
            provider: "binance",
            timeout_ms: 10_000,
        };
        let msg = format!("{err}");
        assert!(msg.contains("GR_ERR_101"));
        assert!(msg.contains("10000ms"));
    }

    #[test]
    fn invalid_rate_display() {
        let err = GiftrailError::InvalidRate {
            provider: "coingecko",
            value: -1.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("GR_ERR_103"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn all_errors_have_gr_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GiftrailError::StoreUnavailable {
                reason: "disabled".into(),
            }),
            Box::new(GiftrailError::QuotaExceeded {
                needed: 4096,
                limit: 1024,
            }),
            Box::new(GiftrailError::MalformedPayload {
                key: "giftrail-order-history".into(),
                reason: "not an array".into(),
            }),
            Box::new(GiftrailError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("GR_ERR_"),
                "Error missing GR_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: GiftrailError = io.into();
        assert!(matches!(err, GiftrailError::Io(_)));
        assert!(format!("{err}").starts_with("GR_ERR_903"));
    }

    #[test]
    fn serde_error_converts() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: GiftrailError = bad.unwrap_err().into();
        assert!(matches!(err, GiftrailError::Serialization(_)));
    }
}
