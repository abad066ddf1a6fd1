//! Ledger order status and its buyer-facing simplification.
//!
//! The remote ledger reports four states; the storefront collapses them
//! into a short label plus a payment-received indicator. The wire names
//! (`pendingPayment`, `paid`, …) match the ledger API and double as the
//! advisory status strings stored in order history.

use serde::{Deserialize, Serialize};

/// Order state as reported by the remote ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Parse a ledger wire name. Unknown strings yield `None` — advisory
    /// status strings are never trusted enough to fail on.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "pendingPayment" => Some(Self::PendingPayment),
            "paid" => Some(Self::Paid),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Ledger wire name for this status.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::PendingPayment => "pendingPayment",
            Self::Paid => "paid",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Buyer-facing simplification of this status.
    #[must_use]
    pub fn simplified(self) -> SimplifiedStatus {
        match self {
            Self::PendingPayment => SimplifiedStatus {
                label: "Pending",
                payment_received: PaymentReceived::No,
            },
            Self::Paid => SimplifiedStatus {
                label: "Processing",
                payment_received: PaymentReceived::Yes,
            },
            Self::Delivered => SimplifiedStatus {
                label: "Delivered",
                payment_received: PaymentReceived::Yes,
            },
            Self::Cancelled => SimplifiedStatus {
                label: "Cancelled",
                payment_received: PaymentReceived::Cancelled,
            },
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Whether payment has been received for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentReceived {
    Yes,
    No,
    Cancelled,
}

impl std::fmt::Display for PaymentReceived {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Buyer-facing view of an order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifiedStatus {
    /// Short display label.
    pub label: &'static str,
    /// Payment-received indicator.
    pub payment_received: PaymentReceived,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        for status in [
            OrderStatus::PendingPayment,
            OrderStatus::Paid,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_wire(status.as_wire()), Some(status));
        }
    }

    #[test]
    fn unknown_wire_name_is_none() {
        assert_eq!(OrderStatus::from_wire("refunded"), None);
        assert_eq!(OrderStatus::from_wire(""), None);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&OrderStatus::PendingPayment).unwrap();
        assert_eq!(json, r#""pendingPayment""#);
        let back: OrderStatus = serde_json::from_str(r#""delivered""#).unwrap();
        assert_eq!(back, OrderStatus::Delivered);
    }

    #[test]
    fn simplification_matrix() {
        let pending = OrderStatus::PendingPayment.simplified();
        assert_eq!(pending.label, "Pending");
        assert_eq!(pending.payment_received, PaymentReceived::No);

        let paid = OrderStatus::Paid.simplified();
        assert_eq!(paid.label, "Processing");
        assert_eq!(paid.payment_received, PaymentReceived::Yes);

        let delivered = OrderStatus::Delivered.simplified();
        assert_eq!(delivered.label, "Delivered");
        assert_eq!(delivered.payment_received, PaymentReceived::Yes);

        let cancelled = OrderStatus::Cancelled.simplified();
        assert_eq!(cancelled.label, "Cancelled");
        assert_eq!(cancelled.payment_received, PaymentReceived::Cancelled);
    }
}
