//! # giftrail-store
//!
//! **Persistent key-value backing store** for the GiftRail resilience core.
//!
//! The storefront's durable state (rate cache, order history) lives behind
//! the [`KvStore`] trait. A store may be absent, disabled, or throwing at
//! any call — every consumer treats store failure as a degraded mode, never
//! a crash. No component outside this crate's consumers touches the backing
//! medium directly; a process-wide singleton exists only at the composition
//! root, injected as `Arc<dyn KvStore>`.
//!
//! Implementations:
//! - [`MemoryStore`]: in-process map, optionally quota-bounded
//! - [`FileStore`]: one file per key under a data directory
//! - [`test_helpers::FailingStore`] / [`test_helpers::FlakyStore`]:
//!   fault injection for crash-safety tests (feature `test-helpers`)

pub mod file;
pub mod memory;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use file::FileStore;
pub use memory::MemoryStore;

use giftrail_types::Result;

/// Abstract durable key→string store.
///
/// All three operations are fallible by design: the backing medium may be
/// unavailable (disabled storage, missing permissions), full (quota), or
/// broken (I/O errors). Callers own the degradation policy.
pub trait KvStore: Send + Sync {
    /// Read the value under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}
