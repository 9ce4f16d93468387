//! Simulated QPay invoice flow.
//!
//! QPay is the dominant QR-payment rail in Mongolia; the production app
//! shows its QR code and per-bank deep links. This deployment has no QPay
//! merchant account, so the flow is simulated: the money actually moves
//! through a Stripe `PaymentIntent`, and this module fabricates the QR
//! payload and deep links around that intent so the mobile UI is exercised
//! end to end. Status polling goes through the regular payment-check
//! endpoint with the underlying intent ID.

use serde::Serialize;
use uuid::Uuid;

use tavag_core::{Currency, Money};

use super::{PaymentError, StripeClient};

/// Banks whose apps can open a QPay QR payload.
const BANK_APPS: &[(&str, &str)] = &[
    ("Khan Bank", "khanbank"),
    ("Trade and Development Bank", "tdbbank"),
    ("State Bank", "statebank"),
    ("Xac Bank", "xacbank"),
    ("M Bank", "mbank"),
    ("Social Pay", "socialpay"),
];

/// A simulated QPay invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QpayInvoice {
    /// Simulated invoice ID.
    pub invoice_id: String,
    /// Payload encoded into the QR code.
    pub qr_text: String,
    /// Rendered QR image for screens that cannot draw their own.
    pub qr_image_url: String,
    /// One deep link per supported banking app.
    pub urls: Vec<QpayBankLink>,
    /// The Stripe intent that actually settles the payment; poll this via
    /// the payment-check endpoint.
    pub payment_intent_id: String,
}

/// Deep link into one banking app.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QpayBankLink {
    pub name: String,
    pub link: String,
}

/// Create a simulated QPay invoice for `amount`.
///
/// # Errors
///
/// Returns `PaymentError` if the backing Stripe intent cannot be created.
pub async fn create_qpay_invoice(
    stripe: &StripeClient,
    amount: Money,
    description: &str,
) -> Result<QpayInvoice, PaymentError> {
    let intent = stripe.create_payment_intent(amount, Currency::Mnt).await?;

    let invoice_id = Uuid::new_v4().to_string();
    let qr_text = format!(
        "https://s.qpay.mn/payment/{invoice_id}?amount={}&desc={}",
        amount.minor_units(),
        urlencoding::encode(description)
    );
    let qr_image_url = format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data={}",
        urlencoding::encode(&qr_text)
    );
    let urls = BANK_APPS
        .iter()
        .map(|(name, scheme)| QpayBankLink {
            name: (*name).to_string(),
            link: format!("{scheme}://q?qPay_QRcode={}", urlencoding::encode(&qr_text)),
        })
        .collect();

    Ok(QpayInvoice {
        invoice_id,
        qr_text,
        qr_image_url,
        urls,
        payment_intent_id: intent.id,
    })
}
