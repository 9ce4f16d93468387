//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use tavag_core::{Money, OrderId, OrderStatus, PaymentMethod, RequestedTime, UserRole};

use crate::error::{ApiError, Result};
use crate::models::{CreateOrder, CreateOrderItem, Order, OrderWithItems};
use crate::state::AppState;

/// Order creation request body.
///
/// The total is not part of the request: it is derived from the items plus
/// the configured delivery fee, so a stale client can never under-charge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub business_id: String,
    pub delivery_address: String,
    pub delivery_notes: Option<String>,
    #[serde(default)]
    pub requested_time: RequestedTime,
    pub payment_method: PaymentMethod,
    pub items: Vec<CreateOrderItem>,
}

/// Status transition request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
    /// Present when a driver is claiming (or re-asserting) the order.
    pub driver_id: Option<String>,
}

/// Create an order and its items atomically.
///
/// POST /api/orders
///
/// The fulfilling business decides where the order enters the lifecycle:
/// restaurant orders start in `placed`, pickup-only businesses start at
/// `ready`.
///
/// # Errors
///
/// 404 if the business is unknown, 400 for a non-business account or an
/// invalid item list.
#[instrument(skip(state, params), fields(customer_id = %params.customer_id))]
pub async fn create(
    State(state): State<AppState>,
    Json(params): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderWithItems>)> {
    let business = state
        .users()
        .get_by_uid(&params.business_id)?
        .ok_or_else(|| ApiError::NotFound(format!("business {}", params.business_id)))?;
    if business.role != UserRole::Business {
        return Err(ApiError::BadRequest(format!(
            "user {} is not a business account",
            params.business_id
        )));
    }

    let status = business
        .business_type
        .unwrap_or_default()
        .initial_order_status();
    let total_amount = derive_total(&params.items, state.config().delivery_fee)?;

    let created = state.orders().create(CreateOrder {
        customer_id: params.customer_id,
        business_id: params.business_id,
        status,
        total_amount,
        delivery_address: params.delivery_address,
        delivery_notes: params.delivery_notes,
        requested_time: params.requested_time,
        payment_method: params.payment_method,
        items: params.items,
    })?;

    tracing::info!(
        order_id = %created.order.id,
        status = %created.order.status,
        total = %created.order.total_amount,
        "order created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch an order with its items.
///
/// GET /api/orders/{id}
///
/// # Errors
///
/// 404 if the ID is unknown.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderWithItems>> {
    let order = state
        .orders()
        .get_with_items(OrderId::new(id))?
        .ok_or_else(|| ApiError::NotFound(format!("order {id}")))?;
    Ok(Json(order))
}

/// List a customer's orders.
///
/// GET /api/orders/customer/{uid}
pub async fn list_by_customer(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_by_customer(&uid)?))
}

/// List a business's orders.
///
/// GET /api/orders/business/{uid}
pub async fn list_by_business(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_by_business(&uid)?))
}

/// List a driver's orders.
///
/// GET /api/orders/driver/{uid}
pub async fn list_by_driver(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_by_driver(&uid)?))
}

/// List pickup-ready orders with no driver attached.
///
/// GET /api/orders/available
pub async fn list_available(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_available()?))
}

/// Transition an order's status, optionally claiming it as a driver.
///
/// PATCH /api/orders/{id}/status
///
/// # Errors
///
/// 404 for an unknown order, 409 for a transition outside the table or a
/// lost driver-claim race.
#[instrument(skip(state, params), fields(order_id = id, status = %params.status))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(params): Json<UpdateStatusRequest>,
) -> Result<Json<Order>> {
    let order = state.orders().update_status(
        OrderId::new(id),
        params.status,
        params.driver_id.as_deref(),
    )?;
    Ok(Json(order))
}

/// Item subtotal plus the flat delivery fee.
fn derive_total(items: &[CreateOrderItem], delivery_fee: Money) -> Result<Money> {
    let mut total = delivery_fee;
    for item in items {
        let line = item
            .unit_price
            .checked_mul(item.quantity)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        total = total
            .checked_add(line)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }
    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tavag_core::ProductId;

    #[test]
    fn test_derive_total_adds_fee_to_subtotal() {
        let items = vec![CreateOrderItem {
            product_id: ProductId::new(1),
            product_name: "Tsuivan".to_string(),
            quantity: 2,
            unit_price: Money::new(1000).unwrap(),
        }];
        let total = derive_total(&items, Money::new(2490).unwrap()).unwrap();
        assert_eq!(total.minor_units(), 4490);
    }

    #[test]
    fn test_derive_total_overflow_is_bad_request() {
        let items = vec![CreateOrderItem {
            product_id: ProductId::new(1),
            product_name: "Everything".to_string(),
            quantity: 2,
            unit_price: Money::new(i64::MAX).unwrap(),
        }];
        let err = derive_total(&items, Money::ZERO).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
