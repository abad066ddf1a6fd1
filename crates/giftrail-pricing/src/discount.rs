//! The storefront discount and the discounted checkout conversion.

use giftrail_types::constants::DISCOUNT_RATE;

use crate::convert::quote_to_base;

/// Apply the fixed 50% storefront discount to a USDT amount.
///
/// Invalid amounts degrade to `0.0`.
#[must_use]
pub fn discounted_amount(quote: f64) -> f64 {
    if !quote.is_finite() || quote < 0.0 {
        return 0.0;
    }
    quote * DISCOUNT_RATE
}

/// Final BTC amount payable for a USDT denomination with the discount
/// applied: convert the discounted amount at `rate`.
#[must_use]
pub fn discounted_base_amount(quote: f64, rate: f64) -> f64 {
    quote_to_base(discounted_amount(quote), rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::format_base;

    #[test]
    fn halves_the_amount() {
        assert_eq!(discounted_amount(100.0), 50.0);
        assert_eq!(discounted_amount(0.0), 0.0);
    }

    #[test]
    fn invalid_amounts_degrade_to_zero() {
        assert_eq!(discounted_amount(f64::NAN), 0.0);
        assert_eq!(discounted_amount(f64::INFINITY), 0.0);
        assert_eq!(discounted_amount(-40.0), 0.0);
    }

    #[test]
    fn checkout_amount_for_hundred_usdt_card() {
        // $100 card → $50 after discount → 0.001 BTC at 50,000.
        let btc = discounted_base_amount(100.0, 50_000.0);
        assert_eq!(format_base(btc), "0.00100000");
    }

    #[test]
    fn checkout_amount_is_total() {
        assert_eq!(discounted_base_amount(100.0, 0.0), 0.0);
        assert_eq!(discounted_base_amount(f64::NAN, 50_000.0), 0.0);
    }
}
