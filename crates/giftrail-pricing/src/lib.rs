//! # giftrail-pricing
//!
//! **Pure pricing plane for the GiftRail storefront.**
//!
//! Pricing is the compute plane — it turns a gift-card denomination and a
//! resolved exchange rate into payment amounts. It has:
//!
//! - **Zero side effects**: no I/O, no clock, no store access
//! - **Total functions**: every input produces a defined value; invalid
//!   input degrades to a safe zero display value, never NaN/∞ and never an
//!   error — these numbers feed directly into user-facing payment amounts
//! - **Fixed domain constants**: the 50% discount multiplier and 8-decimal
//!   BTC display precision come from `giftrail_types::constants`

pub mod convert;
pub mod discount;

pub use convert::{base_to_quote, format_base, format_quote, quote_to_base};
pub use discount::{discounted_amount, discounted_base_amount};
