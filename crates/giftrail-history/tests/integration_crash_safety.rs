//! Integration test: crash safety and cross-instance consistency
//!
//! Exercises the full persistence discipline: write-through, in-memory
//! fallback under a throwing backend, availability re-probe, bounded
//! dedup, and change notification.

use std::sync::Arc;

use giftrail_history::OrderHistoryStore;
use giftrail_store::test_helpers::{FailingStore, FlakyStore};
use giftrail_store::{KvStore, MemoryStore};
use giftrail_types::HistoryConfig;

fn store_with(backend: Arc<dyn KvStore>) -> OrderHistoryStore {
    OrderHistoryStore::new(backend, HistoryConfig::default())
}

#[test]
fn upsert_bounds_to_fifty_newest_first() {
    let store = store_with(Arc::new(MemoryStore::new()));
    for i in 0..60 {
        store.upsert(format!("ORD-{i}"), None);
    }

    let entries = store.load();
    assert_eq!(entries.len(), 50);
    // The 50 most recent, newest first: ORD-59 down to ORD-10.
    assert_eq!(entries[0].order_id.as_str(), "ORD-59");
    assert_eq!(entries[49].order_id.as_str(), "ORD-10");
    assert!(!entries.iter().any(|e| e.order_id.as_str() == "ORD-9"));
}

#[test]
fn upsert_deduplicates_and_refreshes() {
    let store = store_with(Arc::new(MemoryStore::new()));
    store.upsert("ORD-X", Some("pendingPayment"));
    let first_seen = store.load()[0].last_seen;

    store.upsert("ORD-OTHER", None);
    store.upsert("ORD-X", Some("paid"));

    let entries = store.load();
    let matching: Vec<_> = entries
        .iter()
        .filter(|e| e.order_id.as_str() == "ORD-X")
        .collect();
    assert_eq!(matching.len(), 1, "exactly one entry per order id");
    assert_eq!(entries[0].order_id.as_str(), "ORD-X", "moved to front");
    assert_eq!(entries[0].last_known_status.as_deref(), Some("paid"));
    assert!(entries[0].last_seen >= first_seen);
}

#[test]
fn update_status_replaces_in_place() {
    let store = store_with(Arc::new(MemoryStore::new()));
    store.upsert("ORD-1", Some("pendingPayment"));
    store.upsert("ORD-2", None);

    store.update_status("ORD-1", "paid");

    let entries = store.load();
    assert_eq!(entries.len(), 2);
    // Position preserved: ORD-2 is still the newest upsert.
    assert_eq!(entries[0].order_id.as_str(), "ORD-2");
    assert_eq!(entries[1].order_id.as_str(), "ORD-1");
    assert_eq!(entries[1].last_known_status.as_deref(), Some("paid"));
}

#[test]
fn update_status_for_unknown_order_is_noop() {
    let store = store_with(Arc::new(MemoryStore::new()));
    store.upsert("ORD-1", None);
    let mut rx = store.subscribe();

    store.update_status("ORD-UNKNOWN", "paid");

    assert_eq!(store.load().len(), 1);
    assert!(rx.try_recv().is_err(), "no signal for a no-op");
}

#[test]
fn remove_and_clear() {
    let store = store_with(Arc::new(MemoryStore::new()));
    store.upsert("ORD-1", None);
    store.upsert("ORD-2", None);

    store.remove("ORD-1");
    let entries = store.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].order_id.as_str(), "ORD-2");

    store.clear();
    assert!(store.load().is_empty());
}

#[test]
fn throwing_backend_never_escapes() {
    let store = store_with(Arc::new(FailingStore::new()));

    // Every operation succeeds against a store that throws on every call.
    store.upsert("ORD-1", Some("pendingPayment"));
    store.update_status("ORD-1", "paid");
    store.upsert("ORD-2", None);
    store.remove("ORD-2");
    store.clear();
    store.upsert("ORD-3", None);

    // The running session still sees consistent state...
    let entries = store.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].order_id.as_str(), "ORD-3");
    assert!(!store.storage_available());

    // ...but nothing persisted: a fresh instance starts empty.
    let fresh = store_with(Arc::new(FailingStore::new()));
    assert!(fresh.load().is_empty());
}

#[test]
fn write_through_persists_for_new_instances() {
    let backend: Arc<dyn KvStore> = Arc::new(MemoryStore::new());

    let first = store_with(Arc::clone(&backend));
    first.upsert("ORD-1", Some("pendingPayment"));
    first.upsert("ORD-2", None);
    drop(first);

    // Another instance over the same backend sees the latest write.
    let second = store_with(backend);
    let entries = second.load();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].order_id.as_str(), "ORD-2");
}

#[test]
fn corrupted_payload_is_discarded() {
    let backend: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let config = HistoryConfig::default();
    backend.set(&config.storage_key, "][ not an array").unwrap();

    let store = OrderHistoryStore::new(Arc::clone(&backend), config.clone());
    assert!(store.load().is_empty());

    // The store keeps working and overwrites the garbage.
    store.upsert("ORD-1", None);
    let persisted = backend.get(&config.storage_key).unwrap().unwrap();
    assert!(persisted.contains("ORD-1"));
}

#[test]
fn malformed_records_are_dropped_on_load() {
    let backend: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let config = HistoryConfig::default();
    backend
        .set(
            &config.storage_key,
            r#"[{"orderId":"ORD-GOOD","lastSeen":1700000000000},{"orderId":7,"lastSeen":"x"}]"#,
        )
        .unwrap();

    let store = OrderHistoryStore::new(backend, config);
    let entries = store.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].order_id.as_str(), "ORD-GOOD");
}

#[test]
fn quota_exhaustion_degrades_to_memory() {
    // Quota too small for the probe key or any history payload.
    let store = store_with(Arc::new(MemoryStore::with_quota(16)));
    store.upsert("ORD-1", Some("pendingPayment"));

    assert!(!store.storage_available());
    let entries = store.load();
    assert_eq!(entries.len(), 1, "session state survives in memory");
}

#[test]
fn recovery_is_picked_up_on_load() {
    let backend = Arc::new(FlakyStore::new());
    let store = store_with(Arc::clone(&backend) as Arc<dyn KvStore>);

    backend.set_failing(true);
    store.upsert("ORD-DURING-OUTAGE", None);
    assert!(!store.storage_available());
    assert_eq!(store.load().len(), 1);

    // Backend heals; the next load() re-probes and switches back. The
    // reachable store is authoritative, so memory-only state from the
    // outage is superseded by its (empty) contents.
    backend.set_failing(false);
    let entries = store.load();
    assert!(store.storage_available());
    assert!(entries.is_empty());

    // Writes reach the backend again.
    store.upsert("ORD-AFTER", None);
    let persisted = backend
        .inner()
        .get(&HistoryConfig::default().storage_key)
        .unwrap()
        .unwrap();
    assert!(persisted.contains("ORD-AFTER"));
}

#[test]
fn every_mutation_notifies_active_subscribers() {
    let store = store_with(Arc::new(MemoryStore::new()));
    let mut rx = store.subscribe();

    store.upsert("ORD-1", None);
    assert!(rx.try_recv().is_ok());

    store.update_status("ORD-1", "paid");
    assert!(rx.try_recv().is_ok());

    store.remove("ORD-1");
    assert!(rx.try_recv().is_ok());

    store.clear();
    assert!(rx.try_recv().is_ok());
}

#[test]
fn mutations_notify_even_when_backend_throws() {
    let store = store_with(Arc::new(FailingStore::new()));
    let mut rx = store.subscribe();

    store.upsert("ORD-1", None);
    assert!(rx.try_recv().is_ok(), "memory-only mutation still signals");
}

#[test]
fn cross_instance_signal_then_reload() {
    // Two instances over one backend: the writer's own notifier fires; the
    // reader re-loads and observes the writer's state. (Cross-process
    // delivery is wired at the composition root; the re-load contract is
    // what matters here.)
    let backend: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let writer = store_with(Arc::clone(&backend));
    let reader = store_with(Arc::clone(&backend));

    let mut signals = writer.subscribe();
    writer.upsert("ORD-1", Some("paid"));
    assert!(signals.try_recv().is_ok());

    let seen = reader.load();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].last_known_status.as_deref(), Some("paid"));
}
