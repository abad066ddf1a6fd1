//! External rate provider adapters.
//!
//! Each adapter performs one HTTP GET and decodes the provider-specific
//! payload into a validated positive finite rate. Everything else — call
//! bounds, ordering, fallback — belongs to the resolver. Payload decoding
//! is factored into free functions so the wire handling is unit-testable
//! without a network.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use giftrail_types::{GiftrailError, Result, is_valid_rate};

/// Default CoinGecko API root.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default Binance API root.
pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

/// One external price source.
///
/// Implementations return a validated rate or a typed provider error; the
/// resolver treats every error identically (fall through to the next tier).
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Stable name for logs and error codes.
    fn name(&self) -> &'static str;

    /// Fetch the current BTC/USDT rate. The caller bounds the call.
    async fn fetch_rate(&self) -> Result<f64>;
}

/// Build the shared HTTP client for provider adapters.
///
/// The client-level timeout is a backstop; the resolver additionally bounds
/// each call with its own timer.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| GiftrailError::Configuration(format!("http client: {err}")))
}

fn check_rate(provider: &'static str, rate: f64) -> Result<f64> {
    if is_valid_rate(rate) {
        Ok(rate)
    } else {
        Err(GiftrailError::InvalidRate {
            provider,
            value: rate,
        })
    }
}

async fn get_body(
    provider: &'static str,
    client: &reqwest::Client,
    url: &str,
) -> Result<String> {
    let response =
        client
            .get(url)
            .send()
            .await
            .map_err(|err| GiftrailError::ProviderTransport {
                provider,
                reason: err.to_string(),
            })?;

    let status = response.status();
    if !status.is_success() {
        return Err(GiftrailError::ProviderHttp {
            provider,
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| GiftrailError::ProviderTransport {
            provider,
            reason: err.to_string(),
        })
}

// ---------------------------------------------------------------------------
// CoinGecko (primary)
// ---------------------------------------------------------------------------

/// Primary provider: CoinGecko simple-price endpoint.
#[derive(Debug, Clone)]
pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: Option<SimplePriceQuote>,
}

#[derive(Debug, Deserialize)]
struct SimplePriceQuote {
    usdt: Option<f64>,
}

impl CoinGeckoProvider {
    pub const NAME: &'static str = "coingecko";

    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, COINGECKO_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

/// Decode a CoinGecko simple-price payload into a validated rate.
pub fn decode_coingecko(body: &str) -> Result<f64> {
    let payload: SimplePriceResponse =
        serde_json::from_str(body).map_err(|err| GiftrailError::ProviderPayload {
            provider: CoinGeckoProvider::NAME,
            reason: err.to_string(),
        })?;
    let rate = payload
        .bitcoin
        .and_then(|quote| quote.usdt)
        .ok_or_else(|| GiftrailError::ProviderPayload {
            provider: CoinGeckoProvider::NAME,
            reason: "missing bitcoin.usdt field".to_string(),
        })?;
    check_rate(CoinGeckoProvider::NAME, rate)
}

#[async_trait]
impl RateProvider for CoinGeckoProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<f64> {
        let url = format!(
            "{}/simple/price?ids=bitcoin&vs_currencies=usdt",
            self.base_url
        );
        let body = get_body(Self::NAME, &self.client, &url).await?;
        decode_coingecko(&body)
    }
}

// ---------------------------------------------------------------------------
// Binance (secondary)
// ---------------------------------------------------------------------------

/// Secondary provider: Binance spot ticker endpoint.
#[derive(Debug, Clone)]
pub struct BinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct TickerPriceResponse {
    /// Decimal string, e.g. `"67500.12000000"`.
    price: String,
}

impl BinanceProvider {
    pub const NAME: &'static str = "binance";

    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, BINANCE_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

/// Decode a Binance ticker payload into a validated rate.
pub fn decode_binance(body: &str) -> Result<f64> {
    let payload: TickerPriceResponse =
        serde_json::from_str(body).map_err(|err| GiftrailError::ProviderPayload {
            provider: BinanceProvider::NAME,
            reason: err.to_string(),
        })?;
    let rate = payload
        .price
        .parse::<f64>()
        .map_err(|err| GiftrailError::ProviderPayload {
            provider: BinanceProvider::NAME,
            reason: format!("unparseable price {:?}: {err}", payload.price),
        })?;
    check_rate(BinanceProvider::NAME, rate)
}

#[async_trait]
impl RateProvider for BinanceProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_rate(&self) -> Result<f64> {
        let url = format!("{}/api/v3/ticker/price?symbol=BTCUSDT", self.base_url);
        let body = get_body(Self::NAME, &self.client, &url).await?;
        decode_binance(&body)
    }
}
