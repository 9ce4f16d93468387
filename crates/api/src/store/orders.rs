//! Order aggregate store and the status transition contract.
//!
//! Orders and their line items are one creation unit: `create` writes both
//! under a single lock acquisition, so a reader can never observe an order
//! without its items. `update_status` is the only mutation after that, and
//! it owns three invariants:
//!
//! - transitions must be in the [`OrderStatus`] table (re-asserting the
//!   current status is a legal no-op that only refreshes `updated_at`);
//! - `completed_at` is stamped on first entry into a settled status and
//!   never cleared;
//! - driver assignment is a compare-and-swap: a claim carrying a driver
//!   `uid` fails if another driver already holds the order. Two drivers
//!   racing for the same pickup get one winner and one typed error.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use tavag_core::{OrderId, OrderItemId, OrderStatus, PaymentStatus};

use super::StoreError;
use crate::models::{CreateOrder, Order, OrderItem, OrderWithItems};

/// Repository of order aggregates.
pub trait OrderStore: Send + Sync {
    /// Persist an order and its line items as one unit.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the item list is empty or any
    /// quantity is zero.
    fn create(&self, params: CreateOrder) -> Result<OrderWithItems, StoreError>;

    /// The order plus its items; a missing order is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn get_with_items(&self, id: OrderId) -> Result<Option<OrderWithItems>, StoreError>;

    /// All orders placed by one customer, ascending by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn list_by_customer(&self, customer_id: &str) -> Result<Vec<Order>, StoreError>;

    /// All orders fulfilled by one business, ascending by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn list_by_business(&self, business_id: &str) -> Result<Vec<Order>, StoreError>;

    /// All orders assigned to one driver, ascending by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn list_by_driver(&self, driver_id: &str) -> Result<Vec<Order>, StoreError>;

    /// Pickup-ready orders with no driver attached.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn list_available(&self) -> Result<Vec<Order>, StoreError>;

    /// Transition an order's status, optionally claiming it as a driver.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an absent ID,
    /// [`StoreError::IllegalTransition`] for a move outside the table, and
    /// [`StoreError::AlreadyClaimed`] when `driver_id` loses the claim race.
    fn update_status(
        &self,
        id: OrderId,
        next: OrderStatus,
        driver_id: Option<&str>,
    ) -> Result<Order, StoreError>;
}

/// In-memory [`OrderStore`].
#[derive(Default)]
pub struct MemoryOrderStore {
    inner: RwLock<OrderTable>,
}

#[derive(Default)]
struct OrderTable {
    orders: BTreeMap<OrderId, Order>,
    // Keyed by owning order; the item list never changes after creation.
    items: BTreeMap<OrderId, Vec<OrderItem>>,
    next_order_id: i64,
    next_item_id: i64,
}

impl MemoryOrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryOrderStore {
    fn create(&self, params: CreateOrder) -> Result<OrderWithItems, StoreError> {
        if params.items.is_empty() {
            return Err(StoreError::Invalid(
                "an order must contain at least one item".to_string(),
            ));
        }
        if params.items.iter().any(|item| item.quantity == 0) {
            return Err(StoreError::Invalid(
                "item quantity must be positive".to_string(),
            ));
        }

        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        table.next_order_id += 1;
        let order_id = OrderId::new(table.next_order_id);
        let now = Utc::now();

        let order = Order {
            id: order_id,
            customer_id: params.customer_id,
            business_id: params.business_id,
            driver_id: None,
            status: params.status,
            total_amount: params.total_amount,
            delivery_address: params.delivery_address,
            delivery_notes: params.delivery_notes,
            requested_time: params.requested_time,
            payment_status: PaymentStatus::Pending,
            payment_method: params.payment_method,
            created_at: now,
            updated_at: now,
            completed_at: None,
        };

        let items: Vec<OrderItem> = params
            .items
            .into_iter()
            .map(|item| {
                table.next_item_id += 1;
                OrderItem {
                    id: OrderItemId::new(table.next_item_id),
                    order_id,
                    product_id: item.product_id,
                    product_name: item.product_name,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                }
            })
            .collect();

        table.orders.insert(order_id, order.clone());
        table.items.insert(order_id, items.clone());

        Ok(OrderWithItems { order, items })
    }

    fn get_with_items(&self, id: OrderId) -> Result<Option<OrderWithItems>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.orders.get(&id).map(|order| OrderWithItems {
            order: order.clone(),
            items: table.items.get(&id).cloned().unwrap_or_default(),
        }))
    }

    fn list_by_customer(&self, customer_id: &str) -> Result<Vec<Order>, StoreError> {
        self.list_where(|order| order.customer_id == customer_id)
    }

    fn list_by_business(&self, business_id: &str) -> Result<Vec<Order>, StoreError> {
        self.list_where(|order| order.business_id == business_id)
    }

    fn list_by_driver(&self, driver_id: &str) -> Result<Vec<Order>, StoreError> {
        self.list_where(|order| order.driver_id.as_deref() == Some(driver_id))
    }

    fn list_available(&self) -> Result<Vec<Order>, StoreError> {
        self.list_where(|order| order.status.is_pickup_ready() && order.driver_id.is_none())
    }

    fn update_status(
        &self,
        id: OrderId,
        next: OrderStatus,
        driver_id: Option<&str>,
    ) -> Result<Order, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let order = table
            .orders
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("order", id))?;

        if !order.status.can_transition_to(next) {
            return Err(StoreError::IllegalTransition {
                from: order.status,
                to: next,
            });
        }

        // The claim check and the write happen under the same write lock,
        // so two racing claimants serialize here and the loser gets an error
        // instead of silently overwriting the winner's assignment.
        if let Some(driver) = driver_id {
            match order.driver_id.as_deref() {
                Some(existing) if existing != driver => {
                    return Err(StoreError::AlreadyClaimed(id));
                }
                Some(_) => {}
                None => order.driver_id = Some(driver.to_string()),
            }
        }

        order.status = next;
        order.updated_at = Utc::now();
        if next.is_settled() && order.completed_at.is_none() {
            order.completed_at = Some(order.updated_at);
        }

        Ok(order.clone())
    }
}

impl MemoryOrderStore {
    fn list_where(&self, keep: impl Fn(&Order) -> bool) -> Result<Vec<Order>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.orders.values().filter(|o| keep(o)).cloned().collect())
    }
}
