//! # giftrail-types
//!
//! Shared types, errors, and configuration for the **GiftRail** resilience
//! core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Rate model**: [`RateSnapshot`], [`RateProvenance`]
//! - **History model**: [`OrderId`], [`OrderHistoryEntry`]
//! - **Order status**: [`OrderStatus`], [`SimplifiedStatus`], [`PaymentReceived`]
//! - **Configuration**: [`RateConfig`], [`HistoryConfig`]
//! - **Errors**: [`GiftrailError`] with `GR_ERR_` prefix codes
//! - **Display helpers**: [`format_time_elapsed`]
//! - **Constants**: system-wide defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod rate;
pub mod status;
pub mod time;

// Re-export all primary types at crate root for ergonomic imports:
//   use giftrail_types::{RateSnapshot, RateProvenance, OrderHistoryEntry, ...};

pub use config::*;
pub use error::*;
pub use history::*;
pub use rate::*;
pub use status::*;
pub use time::*;

// Constants are accessed via `giftrail_types::constants::FOO`
// (not re-exported to avoid name collisions).
