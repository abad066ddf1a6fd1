//! # giftrail-history
//!
//! **Crash-safe order-history plane**: remember the orders this device has
//! seen, survive a disabled or throwing backing store, and tell other
//! instances to refresh.
//!
//! ## Architecture
//!
//! ```text
//! UI → OrderHistoryStore::{upsert, update_status, remove, clear}
//!        → backing store (write-through)  — or in-memory fallback
//!        → ChangeNotifier::notify()       — best-effort signal
//! other instances ← subscribe() ← re-load() on every signal
//! ```
//!
//! No store operation ever returns an error: backing-store failure flips
//! the session into in-memory mode (re-probed on later `load()`s), and
//! corrupted persisted data is discarded rather than surfaced. The remote
//! ledger stays authoritative for order state — everything here is local
//! convenience memory.

pub mod notify;
pub mod store;

pub use notify::ChangeNotifier;
pub use store::OrderHistoryStore;
