//! Order aggregate domain types.
//!
//! An order and its line items form one aggregate: the items are created
//! atomically with the order and are read-only afterwards. Line items carry
//! the unit price captured at order time, so historical orders are immune
//! to later product price changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tavag_core::{
    Money, OrderId, OrderItemId, OrderStatus, PaymentMethod, PaymentStatus, ProductId,
    RequestedTime,
};

/// An order as the customer, business, and driver dashboards see it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned ID.
    pub id: OrderId,
    /// `uid` of the ordering customer.
    pub customer_id: String,
    /// `uid` of the fulfilling business.
    pub business_id: String,
    /// `uid` of the assigned driver; absent until a driver claims the order.
    pub driver_id: Option<String>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Item subtotal plus delivery fee, derived at creation.
    pub total_amount: Money,
    /// Where to deliver.
    pub delivery_address: String,
    /// Free-form instructions for the driver.
    pub delivery_notes: Option<String>,
    /// When the customer wants the order.
    pub requested_time: RequestedTime,
    /// Payment state as last reported by the provider.
    pub payment_status: PaymentStatus,
    /// How the customer chose to pay.
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Stamped on first entry into a settled status; never cleared.
    pub completed_at: Option<DateTime<Utc>>,
}

/// One line of an order, frozen at creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Store-assigned ID.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Referenced product.
    pub product_id: ProductId,
    /// Product name snapshot for display.
    pub product_name: String,
    /// Positive quantity.
    pub quantity: u32,
    /// Unit price captured at order time.
    pub unit_price: Money,
}

/// The full aggregate returned by order reads.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Parameters for creating an order aggregate.
///
/// The route layer resolves the business, picks the initial status, and
/// derives the total before handing this to the store.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_id: String,
    pub business_id: String,
    pub status: OrderStatus,
    pub total_amount: Money,
    pub delivery_address: String,
    pub delivery_notes: Option<String>,
    pub requested_time: RequestedTime,
    pub payment_method: PaymentMethod,
    pub items: Vec<CreateOrderItem>,
}

/// One line of an order creation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
}
