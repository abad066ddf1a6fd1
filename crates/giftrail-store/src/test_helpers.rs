//! Fault-injection stores for crash-safety tests.
//! **Never use in production.**

use std::sync::atomic::{AtomicBool, Ordering};

use giftrail_types::{GiftrailError, Result};

use crate::{KvStore, MemoryStore};

/// A store where every call fails — models a disabled or absent backend.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn fail<T>() -> Result<T> {
        Err(GiftrailError::StoreUnavailable {
            reason: "store disabled".to_string(),
        })
    }
}

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Self::fail()
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Self::fail()
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Self::fail()
    }
}

/// A memory store with a failure toggle, for availability-recovery tests:
/// flip [`FlakyStore::set_failing`] to simulate the backend going down and
/// coming back.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl FlakyStore {
    /// Healthy store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the failure mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Whether calls currently fail.
    pub fn is_failing(&self) -> bool {
        self.failing.load(Ordering::SeqCst)
    }

    /// Direct access to the wrapped store, for assertions.
    #[must_use]
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    fn check(&self) -> Result<()> {
        if self.is_failing() {
            Err(GiftrailError::StoreUnavailable {
                reason: "store flaking".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl KvStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.inner.remove(key)
    }
}
