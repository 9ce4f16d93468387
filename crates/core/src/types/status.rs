//! Role and status enums, including the order lifecycle state machine.

use serde::{Deserialize, Serialize};

/// Account role with different app surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Orders food through the customer app.
    Customer,
    /// Runs a storefront and fulfills incoming orders.
    Business,
    /// Picks up ready orders and delivers them.
    Delivery,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Business => write!(f, "business"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "business" => Ok(Self::Business),
            "delivery" => Ok(Self::Delivery),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

/// Kind of business a storefront runs.
///
/// Only restaurants cook to order; every other kind hands over shelf goods,
/// so their orders are born pickup-ready (see [`BusinessType::initial_order_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    #[default]
    Restaurant,
    Grocery,
    Pharmacy,
    Convenience,
}

impl BusinessType {
    /// Whether orders go through the kitchen stages (`Preparing`/`Ready`).
    #[must_use]
    pub const fn has_kitchen(&self) -> bool {
        matches!(self, Self::Restaurant)
    }

    /// The status a freshly created order starts in.
    #[must_use]
    pub const fn initial_order_status(&self) -> OrderStatus {
        if self.has_kitchen() {
            OrderStatus::Placed
        } else {
            OrderStatus::Ready
        }
    }
}

/// Order lifecycle status.
///
/// A closed state machine replacing the free-form status strings the
/// dashboards used to write directly:
///
/// ```text
/// Placed    -> Preparing | Cancelled
/// Preparing -> Ready     | Cancelled
/// Ready     -> OnTheWay  | Cancelled
/// OnTheWay  -> Delivered | Cancelled
/// Delivered -> Completed
/// Completed -> (terminal)
/// Cancelled -> (terminal)
/// ```
///
/// Non-restaurant orders enter the machine at `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Placed by the customer, waiting for the kitchen.
    Placed,
    /// The kitchen is working on it.
    Preparing,
    /// Ready for a driver to pick up.
    Ready,
    /// A driver has it and is en route.
    OnTheWay,
    /// Handed to the customer.
    Delivered,
    /// Confirmed and archived by the customer.
    Completed,
    /// Abandoned before delivery.
    Cancelled,
}

impl OrderStatus {
    /// Whether a transition from `self` to `next` is legal.
    ///
    /// Re-asserting the current status is always legal; the dashboards retry
    /// status writes freely and a repeat must stay a no-op.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Self::Placed, Self::Preparing | Self::Cancelled)
                | (Self::Preparing, Self::Ready | Self::Cancelled)
                | (Self::Ready, Self::OnTheWay | Self::Cancelled)
                | (Self::OnTheWay, Self::Delivered | Self::Cancelled)
                | (Self::Delivered, Self::Completed)
        )
    }

    /// Whether the order has settled: the status family that stamps
    /// `completed_at`.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Delivered | Self::Completed | Self::Cancelled)
    }

    /// Whether no further transition exists.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether a driver may claim the order in this status.
    #[must_use]
    pub const fn is_pickup_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placed => write!(f, "placed"),
            Self::Preparing => write!(f, "preparing"),
            Self::Ready => write!(f, "ready"),
            Self::OnTheWay => write!(f, "on-the-way"),
            Self::Delivered => write!(f, "delivered"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "on-the-way" => Ok(Self::OnTheWay),
            "delivered" => Ok(Self::Delivered),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Payment state of an order, as last reported by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

/// How the customer chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Qpay,
    Cash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            OrderStatus::Placed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
            OrderStatus::Completed,
        ];
        for pair in path.windows(2) {
            assert!(
                pair[0].can_transition_to(pair[1]),
                "{} -> {} should be legal",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_cancel_from_any_active_status() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::OnTheWay,
        ] {
            assert!(status.can_transition_to(OrderStatus::Cancelled));
        }
    }

    #[test]
    fn test_no_backwards_transitions() {
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::OnTheWay));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Placed));
    }

    #[test]
    fn test_no_skipping_stages() {
        assert!(!OrderStatus::Placed.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Preparing.can_transition_to(OrderStatus::OnTheWay));
    }

    #[test]
    fn test_terminal_statuses_have_no_exits() {
        for next in [
            OrderStatus::Placed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
        ] {
            assert!(!OrderStatus::Completed.can_transition_to(next));
            assert!(!OrderStatus::Cancelled.can_transition_to(next));
        }
        // Cancelled orders cannot be completed or vice versa
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_same_status_is_legal() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::OnTheWay,
            OrderStatus::Completed,
        ] {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn test_settled_and_terminal_sets() {
        assert!(OrderStatus::Delivered.is_settled());
        assert!(OrderStatus::Completed.is_settled());
        assert!(OrderStatus::Cancelled.is_settled());
        assert!(!OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Ready.is_settled());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::OnTheWay).expect("serialize");
        assert_eq!(json, "\"on-the-way\"");

        let parsed: OrderStatus = serde_json::from_str("\"preparing\"").expect("deserialize");
        assert_eq!(parsed, OrderStatus::Preparing);
    }

    #[test]
    fn test_status_from_str_roundtrip() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.to_string().parse().expect("roundtrip");
            assert_eq!(parsed, status);
        }
        assert!("declined".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_initial_status_by_business_type() {
        assert_eq!(
            BusinessType::Restaurant.initial_order_status(),
            OrderStatus::Placed
        );
        assert_eq!(
            BusinessType::Grocery.initial_order_status(),
            OrderStatus::Ready
        );
        assert_eq!(
            BusinessType::Pharmacy.initial_order_status(),
            OrderStatus::Ready
        );
    }
}
