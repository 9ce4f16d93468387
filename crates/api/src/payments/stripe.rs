//! Stripe REST API client.
//!
//! Uses `reqwest` against Stripe's form-encoded REST API. Only the three
//! calls the marketplace needs are implemented: creating a `PaymentIntent`,
//! looking one up, and creating a Checkout Session.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use tavag_core::{Currency, Money};

use super::PaymentError;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Client for the Stripe API.
///
/// Cheaply cloneable; the underlying HTTP client and key are shared.
#[derive(Clone)]
pub struct StripeClient {
    inner: Arc<StripeClientInner>,
}

struct StripeClientInner {
    client: reqwest::Client,
    base_url: String,
    secret_key: SecretString,
}

/// A Stripe `PaymentIntent`, reduced to the fields the API surfaces.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    /// Present on creation; handed to the client SDK to confirm payment.
    pub client_secret: Option<String>,
    pub status: PaymentIntentStatus,
    pub amount: i64,
    pub currency: String,
}

/// Stripe `PaymentIntent` lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    /// Forward compatibility with statuses Stripe may add.
    #[serde(other)]
    Unknown,
}

impl PaymentIntentStatus {
    /// Whether the payment has gone through.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// A Stripe Checkout Session, reduced to the fields the API surfaces.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Hosted payment page to send the customer to.
    pub url: Option<String>,
}

/// Parameters for creating a Checkout Session.
#[derive(Debug, Clone)]
pub struct CheckoutSessionParams {
    /// Line items as (name, unit amount, quantity).
    pub line_items: Vec<(String, Money, u32)>,
    pub currency: Currency,
    pub success_url: String,
    pub cancel_url: String,
}

/// Error payload shape Stripe returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
}

impl StripeClient {
    /// Create a new Stripe client.
    #[must_use]
    pub fn new(secret_key: SecretString) -> Self {
        Self::with_base_url(secret_key, STRIPE_API_BASE.to_string())
    }

    /// Create a client against a non-default endpoint (tests, stripe-mock).
    #[must_use]
    pub fn with_base_url(secret_key: SecretString, base_url: String) -> Self {
        Self {
            inner: Arc::new(StripeClientInner {
                client: reqwest::Client::new(),
                base_url,
                secret_key,
            }),
        }
    }

    /// Create a `PaymentIntent` for `amount` in `currency`.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` if the request fails or Stripe rejects it.
    pub async fn create_payment_intent(
        &self,
        amount: Money,
        currency: Currency,
    ) -> Result<PaymentIntent, PaymentError> {
        let params = vec![
            ("amount".to_string(), amount.minor_units().to_string()),
            ("currency".to_string(), currency.code().to_string()),
            (
                "automatic_payment_methods[enabled]".to_string(),
                "true".to_string(),
            ),
        ];
        self.post_form("/v1/payment_intents", &params).await
    }

    /// Look up a `PaymentIntent` by ID.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` if the request fails or the ID is unknown.
    pub async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError> {
        let url = format!("{}/v1/payment_intents/{id}", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(&url)
            .basic_auth(self.inner.secret_key.expose_secret(), None::<&str>)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Create a hosted Checkout Session.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` if the request fails or Stripe rejects it.
    pub async fn create_checkout_session(
        &self,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, PaymentError> {
        let mut form = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), params.success_url),
            ("cancel_url".to_string(), params.cancel_url),
        ];
        for (index, (name, amount, quantity)) in params.line_items.into_iter().enumerate() {
            form.push((
                format!("line_items[{index}][price_data][currency]"),
                params.currency.code().to_string(),
            ));
            form.push((
                format!("line_items[{index}][price_data][product_data][name]"),
                name,
            ));
            form.push((
                format!("line_items[{index}][price_data][unit_amount]"),
                amount.minor_units().to_string(),
            ));
            form.push((format!("line_items[{index}][quantity]"), quantity.to_string()));
        }
        self.post_form("/v1/checkout/sessions", &form).await
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<T, PaymentError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self
            .inner
            .client
            .post(&url)
            .basic_auth(self.inner.secret_key.expose_secret(), None::<&str>)
            .form(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Read the body as text first so a failed parse can be diagnosed.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PaymentError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| body.chars().take(200).collect());
            tracing::error!(
                status = %status,
                message = %message,
                "Stripe API returned non-success status"
            );
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse Stripe response"
            );
            PaymentError::Parse(e)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_status_parsing() {
        let intent: PaymentIntent = serde_json::from_str(
            r#"{
                "id": "pi_123",
                "client_secret": "pi_123_secret_456",
                "status": "requires_payment_method",
                "amount": 4490,
                "currency": "mnt"
            }"#,
        )
        .unwrap();
        assert_eq!(intent.status, PaymentIntentStatus::RequiresPaymentMethod);
        assert!(!intent.status.is_paid());
    }

    #[test]
    fn test_unknown_status_is_forward_compatible() {
        let status: PaymentIntentStatus =
            serde_json::from_str("\"some_future_status\"").unwrap();
        assert_eq!(status, PaymentIntentStatus::Unknown);
    }

    #[test]
    fn test_succeeded_is_paid() {
        let status: PaymentIntentStatus = serde_json::from_str("\"succeeded\"").unwrap();
        assert!(status.is_paid());
    }

    #[test]
    fn test_error_envelope_parsing() {
        let envelope: StripeErrorEnvelope = serde_json::from_str(
            r#"{"error": {"message": "No such payment_intent: 'pi_missing'"}}"#,
        )
        .unwrap();
        assert_eq!(
            envelope.error.message.as_deref(),
            Some("No such payment_intent: 'pi_missing'")
        );
    }
}
