//! Payment provider clients.
//!
//! Stripe is the only real provider; it is an external black box reached
//! over its form-encoded REST API. The QPay flow is a simulation layered on
//! top of a Stripe `PaymentIntent` (see [`qpay`]) - it produces the QR
//! payload and bank deep links the mobile apps expect without talking to
//! QPay itself.

mod qpay;
mod stripe;

pub use qpay::{QpayBankLink, QpayInvoice, create_qpay_invoice};
pub use stripe::{
    CheckoutSession, CheckoutSessionParams, PaymentIntent, PaymentIntentStatus, StripeClient,
};

use thiserror::Error;

/// Errors that can occur when talking to the payment provider.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with an error status.
    #[error("Stripe API error ({status}): {message}")]
    Api {
        /// HTTP status code the provider returned.
        status: u16,
        /// Provider-supplied error message.
        message: String,
    },

    /// JSON parsing of the provider response failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_error_display() {
        let err = PaymentError::Api {
            status: 402,
            message: "Your card was declined.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Stripe API error (402): Your card was declined."
        );
    }
}
