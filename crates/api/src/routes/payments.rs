//! Payment route handlers.
//!
//! Every handler here degrades to a fixed 500 when `STRIPE_SECRET_KEY` is
//! absent; the server itself starts fine without it.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use tavag_core::{Currency, Money};

use crate::error::{ApiError, Result};
use crate::payments::{
    CheckoutSessionParams, PaymentIntentStatus, QpayInvoice, StripeClient, create_qpay_invoice,
};
use crate::state::AppState;

fn stripe(state: &AppState) -> Result<&StripeClient> {
    state.stripe().ok_or(ApiError::PaymentsNotConfigured)
}

// =============================================================================
// Payment intents
// =============================================================================

/// Request to create a `PaymentIntent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentRequest {
    /// Amount in minor units.
    pub amount: Money,
}

/// Response from creating a `PaymentIntent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: Option<String>,
    pub payment_intent_id: String,
}

/// Create a Stripe `PaymentIntent` in tugrik.
///
/// POST /api/create-payment-intent
///
/// # Errors
///
/// 500 when payments are unconfigured, 502 when Stripe rejects the call.
#[instrument(skip(state, params), fields(amount = %params.amount))]
pub async fn create_intent(
    State(state): State<AppState>,
    Json(params): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>> {
    let intent = stripe(&state)?
        .create_payment_intent(params.amount, Currency::Mnt)
        .await?;
    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
    }))
}

/// Response from a payment status lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPaymentResponse {
    pub status: PaymentIntentStatus,
    pub paid: bool,
}

/// Look up a `PaymentIntent`'s status.
///
/// GET /api/check-payment/{id}
///
/// The QPay screen polls this with the intent ID embedded in the invoice.
///
/// # Errors
///
/// 500 when payments are unconfigured, 502 when Stripe rejects the call.
pub async fn check(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CheckPaymentResponse>> {
    let intent = stripe(&state)?.retrieve_payment_intent(&id).await?;
    Ok(Json(CheckPaymentResponse {
        status: intent.status,
        paid: intent.status.is_paid(),
    }))
}

// =============================================================================
// QPay
// =============================================================================

/// Request to create a simulated QPay invoice.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQpayRequest {
    /// Amount in minor units.
    pub amount: Money,
    /// Shown in the banking app ("Tavag order #12").
    pub description: Option<String>,
}

/// Create a simulated QPay invoice backed by a Stripe intent.
///
/// POST /api/create-qpay-payment
///
/// # Errors
///
/// 500 when payments are unconfigured, 502 when Stripe rejects the call.
#[instrument(skip(state, params), fields(amount = %params.amount))]
pub async fn create_qpay(
    State(state): State<AppState>,
    Json(params): Json<CreateQpayRequest>,
) -> Result<Json<QpayInvoice>> {
    let description = params.description.unwrap_or_else(|| "Tavag order".to_string());
    let invoice = create_qpay_invoice(stripe(&state)?, params.amount, &description).await?;
    Ok(Json(invoice))
}

// =============================================================================
// Checkout
// =============================================================================

/// One line of a checkout request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub name: String,
    /// Unit amount in minor units.
    pub amount: Money,
    pub quantity: u32,
}

/// Request to create a Checkout Session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
}

/// Response from creating a Checkout Session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub url: Option<String>,
    pub session_id: String,
}

/// Create a hosted Stripe Checkout Session.
///
/// POST /api/stripe-checkout
///
/// # Errors
///
/// 400 for an empty item list, 500 when payments are unconfigured, 502
/// when Stripe rejects the call.
pub async fn checkout(
    State(state): State<AppState>,
    Json(params): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    if params.items.is_empty() {
        return Err(ApiError::BadRequest(
            "checkout requires at least one item".to_string(),
        ));
    }

    let base_url = &state.config().base_url;
    let session = stripe(&state)?
        .create_checkout_session(CheckoutSessionParams {
            line_items: params
                .items
                .into_iter()
                .map(|item| (item.name, item.amount, item.quantity))
                .collect(),
            currency: Currency::Mnt,
            success_url: format!("{base_url}/payment/success"),
            cancel_url: format!("{base_url}/payment/cancel"),
        })
        .await?;

    Ok(Json(CheckoutResponse {
        url: session.url,
        session_id: session.id,
    }))
}

/// Redirect to the fixed checkout URL.
///
/// GET /api/stripe-static-checkout
///
/// # Errors
///
/// 500 when no static checkout URL is configured.
pub async fn static_checkout(State(state): State<AppState>) -> Result<Response> {
    let url = state
        .config()
        .static_checkout_url
        .clone()
        .ok_or(ApiError::PaymentsNotConfigured)?;
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}
