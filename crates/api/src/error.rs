//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server-class errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, ApiError>`; the `IntoResponse` impl owns the status mapping
//! and keeps internal detail out of client responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::payments::PaymentError;
use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Payment provider call failed.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Payment endpoints called without a configured provider key.
    #[error("Payment processing is not configured")]
    PaymentsNotConfigured,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Store(err) => match err {
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::DuplicateUid(_)
                | StoreError::IllegalTransition { .. }
                | StoreError::AlreadyClaimed(_) => StatusCode::CONFLICT,
                StoreError::Invalid(_) => StatusCode::BAD_REQUEST,
                StoreError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Payment(_) => StatusCode::BAD_GATEWAY,
            Self::PaymentsNotConfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-safe message; internal and upstream detail stays in the logs.
    fn client_message(&self) -> String {
        match self {
            Self::Store(StoreError::Poisoned) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
            Self::Payment(_) => "Payment provider error".to_string(),
            Self::Store(err) => err.to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.status().is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            error: self.client_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tavag_core::{OrderId, OrderStatus};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("order 1".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PaymentsNotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Store(StoreError::AlreadyClaimed(OrderId::new(1))).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Store(StoreError::IllegalTransition {
                from: OrderStatus::Placed,
                to: OrderStatus::Delivered,
            })
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Store(StoreError::not_found("order", 7)).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = ApiError::Internal("lock poisoned in MemoryOrderStore".to_string());
        assert_eq!(err.client_message(), "Internal server error");

        let err = ApiError::Store(StoreError::Poisoned);
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn test_store_messages_pass_through() {
        let err = ApiError::Store(StoreError::DuplicateUid("uid-1".to_string()));
        assert_eq!(err.client_message(), "uid \"uid-1\" is already registered");
    }
}
