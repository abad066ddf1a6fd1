//! Currency conversion between the quote asset (USDT) and the payment
//! asset (BTC), plus display formatting.
//!
//! Every function is total: a non-finite or negative amount, a non-positive
//! rate, or a non-finite result all degrade to the zero value.

use giftrail_types::constants::BASE_DISPLAY_PRECISION;

/// Convert a USDT amount to BTC at `rate` (USDT per BTC).
///
/// Returns `0.0` for any invalid input or result.
#[must_use]
pub fn quote_to_base(quote: f64, rate: f64) -> f64 {
    if !quote.is_finite() || quote < 0.0 || !rate.is_finite() || rate <= 0.0 {
        return 0.0;
    }
    let base = quote / rate;
    if base.is_finite() { base } else { 0.0 }
}

/// Convert a BTC amount back to USDT at `rate` (USDT per BTC).
///
/// Returns `0.0` for any invalid input or result.
#[must_use]
pub fn base_to_quote(base: f64, rate: f64) -> f64 {
    if !base.is_finite() || base < 0.0 || !rate.is_finite() || rate <= 0.0 {
        return 0.0;
    }
    let quote = base * rate;
    if quote.is_finite() { quote } else { 0.0 }
}

/// Format a BTC amount at standard 8-decimal precision.
///
/// Invalid amounts render as the zero value (`"0.00000000"`).
#[must_use]
pub fn format_base(amount: f64) -> String {
    let amount = if amount.is_finite() && amount >= 0.0 {
        amount
    } else {
        0.0
    };
    let prec = BASE_DISPLAY_PRECISION;
    format!("{amount:.prec$}")
}

/// Format a USDT amount for display, e.g. `$1,500 USDT`.
///
/// Whole amounts drop the cents; fractional amounts keep two places.
/// Invalid amounts render as `$0 USDT`.
#[must_use]
pub fn format_quote(amount: f64) -> String {
    if !amount.is_finite() || amount < 0.0 {
        return "$0 USDT".to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    if frac == 0 {
        format!("${whole} USDT")
    } else {
        format!("${whole}.{frac:02} USDT")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(*b));
    }
    out
}
