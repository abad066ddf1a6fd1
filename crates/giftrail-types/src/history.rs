//! Order-history entry model.
//!
//! Entries are persisted as a bounded, newest-first JSON array under a fixed
//! backing-store key. Field names and the epoch-millisecond `lastSeen`
//! encoding are part of the persisted wire format and must not change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque order identifier, assigned by the remote ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One remembered order in the local history.
///
/// `last_known_status` is advisory only — the remote ledger stays
/// authoritative for the actual order state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryEntry {
    /// Unique key within the collection.
    pub order_id: OrderId,
    /// Most recent interaction with this order.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_seen: DateTime<Utc>,
    /// Last status observed for this order, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_known_status: Option<String>,
}

impl OrderHistoryEntry {
    /// Entry seen now.
    #[must_use]
    pub fn new(order_id: impl Into<OrderId>, last_known_status: Option<String>) -> Self {
        Self {
            order_id: order_id.into(),
            last_seen: Utc::now(),
            last_known_status,
        }
    }

    /// Refresh `last_seen` and replace the advisory status in place.
    pub fn observe_status(&mut self, status: impl Into<String>) {
        self.last_seen = Utc::now();
        self.last_known_status = Some(status.into());
    }
}
