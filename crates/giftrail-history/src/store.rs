//! The order-history store.
//!
//! Write-through over an injected backing store with an in-memory fallback:
//! every mutation lands in the memory copy first, then best-effort in the
//! backing store. A failing backend flips the session into memory-only mode
//! so the UI keeps a consistent view; availability is re-probed on later
//! `load()` calls so recovery (say, the user granting storage permission)
//! is picked up without a restart. When the backend is reachable it is
//! authoritative and the memory copy mirrors it — never both at once.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use tokio::sync::broadcast;

use giftrail_store::KvStore;
use giftrail_types::{HistoryConfig, OrderHistoryEntry, OrderId};

use crate::notify::ChangeNotifier;

#[derive(Debug, Default)]
struct HistoryState {
    /// In-memory copy: fallback when the backend is down, mirror otherwise.
    memory: Vec<OrderHistoryEntry>,
    /// Cleared on the first backing-store failure of the session.
    storage_available: bool,
}

/// Bounded, newest-first memory of orders seen on this device.
///
/// None of these operations returns an error to the caller.
pub struct OrderHistoryStore {
    store: Arc<dyn KvStore>,
    notifier: ChangeNotifier,
    config: HistoryConfig,
    state: RwLock<HistoryState>,
}

impl OrderHistoryStore {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>, config: HistoryConfig) -> Self {
        Self {
            store,
            notifier: ChangeNotifier::new(),
            config,
            state: RwLock::new(HistoryState {
                memory: Vec::new(),
                storage_available: true,
            }),
        }
    }

    /// The notifier fired after every successful mutation.
    #[must_use]
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Subscribe to change signals. Call `load()` once after subscribing —
    /// signals carry no payload and missed ones are not replayed.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notifier.subscribe()
    }

    /// Whether the backing store accepted the most recent interaction.
    #[must_use]
    pub fn storage_available(&self) -> bool {
        self.lock().storage_available
    }

    /// Current entries, newest first.
    ///
    /// Re-probes a backend previously marked unavailable, tolerates
    /// corrupted payloads (discarded, empty result), and silently drops
    /// individual malformed records.
    pub fn load(&self) -> Vec<OrderHistoryEntry> {
        let mut state = self.lock();
        if !state.storage_available && self.probe_storage() {
            tracing::info!("History backing store is reachable again");
            state.storage_available = true;
        }
        self.read_entries(&mut state)
    }

    /// Record an order as just seen: any previous entry with the same id is
    /// replaced, the new entry goes to the front, and the collection is
    /// truncated to the configured bound.
    pub fn upsert(&self, order_id: impl Into<OrderId>, status: Option<&str>) {
        let order_id = order_id.into();
        let mut state = self.lock();
        let mut entries = self.read_entries(&mut state);
        entries.retain(|entry| entry.order_id != order_id);
        entries.insert(
            0,
            OrderHistoryEntry::new(order_id, status.map(str::to_string)),
        );
        entries.truncate(self.config.max_entries);
        self.persist(&mut state, entries);
        drop(state);
        self.notifier.notify();
    }

    /// Refresh the advisory status of a known order in place. Unknown
    /// orders are a no-op: nothing is persisted and no signal fires.
    pub fn update_status(&self, order_id: &str, status: &str) {
        let mut state = self.lock();
        let mut entries = self.read_entries(&mut state);
        let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.order_id.as_str() == order_id)
        else {
            return;
        };
        entry.observe_status(status);
        self.persist(&mut state, entries);
        drop(state);
        self.notifier.notify();
    }

    /// Forget one order.
    pub fn remove(&self, order_id: &str) {
        let mut state = self.lock();
        let mut entries = self.read_entries(&mut state);
        entries.retain(|entry| entry.order_id.as_str() != order_id);
        self.persist(&mut state, entries);
        drop(state);
        self.notifier.notify();
    }

    /// Forget everything.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.memory.clear();
        if state.storage_available {
            if let Err(err) = self.store.remove(&self.config.storage_key) {
                tracing::warn!(error = %err, "History clear failed; continuing in-memory only");
                state.storage_available = false;
            }
        }
        drop(state);
        self.notifier.notify();
    }

    fn lock(&self) -> RwLockWriteGuard<'_, HistoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write+remove a throwaway key to see whether the backend works.
    fn probe_storage(&self) -> bool {
        self.store
            .set(&self.config.probe_key, "probe")
            .and_then(|()| self.store.remove(&self.config.probe_key))
            .is_ok()
    }

    /// Read current entries from whichever representation is authoritative.
    fn read_entries(&self, state: &mut HistoryState) -> Vec<OrderHistoryEntry> {
        if !state.storage_available {
            return state.memory.clone();
        }
        let payload = match self.store.get(&self.config.storage_key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                state.memory.clear();
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!(error = %err, "History read failed; using in-memory fallback");
                state.storage_available = false;
                return state.memory.clone();
            }
        };
        match decode_entries(&payload) {
            Some(entries) => {
                state.memory = entries.clone();
                entries
            }
            None => {
                tracing::warn!(
                    key = %self.config.storage_key,
                    "Discarding corrupted history payload"
                );
                state.memory.clear();
                Vec::new()
            }
        }
    }

    /// Apply `entries` to the memory copy and write through best-effort.
    fn persist(&self, state: &mut HistoryState, entries: Vec<OrderHistoryEntry>) {
        state.memory = entries;
        if !state.storage_available {
            return;
        }
        match serde_json::to_string(&state.memory) {
            Ok(payload) => {
                if let Err(err) = self.store.set(&self.config.storage_key, &payload) {
                    tracing::warn!(
                        error = %err,
                        "History write failed; falling back to in-memory state for this session"
                    );
                    state.storage_available = false;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to encode history entries");
            }
        }
    }
}

/// Decode a persisted history payload. `None` for anything that is not a
/// JSON array; individual records failing shape validation (`orderId`
/// string, `lastSeen` number) are dropped, not fatal.
fn decode_entries(payload: &str) -> Option<Vec<OrderHistoryEntry>> {
    let value: serde_json::Value = serde_json::from_str(payload).ok()?;
    let array = value.as_array()?;
    Some(
        array
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
    )
}
