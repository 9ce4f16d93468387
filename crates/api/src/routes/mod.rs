//! HTTP route handlers for the marketplace API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                        - Liveness check
//!
//! # Users
//! GET    /api/users/{id}                - Fetch by store ID
//! GET    /api/users/uid/{uid}           - Fetch by external auth ID
//! POST   /api/users                     - Register
//! PATCH  /api/users/{id}                - Partial profile update
//!
//! # Products
//! GET    /api/products/{id}             - Fetch product
//! GET    /api/products/business/{uid}   - Business catalog
//! POST   /api/products                  - Create
//! PATCH  /api/products/{id}             - Partial update
//! DELETE /api/products/{id}             - Delete
//!
//! # Orders
//! GET    /api/orders/available          - Pickup-ready, unclaimed orders
//! GET    /api/orders/customer/{uid}     - Customer's orders
//! GET    /api/orders/business/{uid}     - Business's orders
//! GET    /api/orders/driver/{uid}       - Driver's orders
//! GET    /api/orders/{id}               - Order + items
//! POST   /api/orders                    - Create order + items atomically
//! PATCH  /api/orders/{id}/status        - Transition status / claim as driver
//!
//! # Payments
//! POST   /api/create-payment-intent     - Stripe PaymentIntent
//! POST   /api/create-qpay-payment       - Simulated QPay invoice
//! GET    /api/check-payment/{id}        - PaymentIntent status lookup
//! POST   /api/stripe-checkout           - Stripe Checkout Session
//! GET    /api/stripe-static-checkout    - Redirect to fixed checkout URL
//!
//! # Recommendations
//! GET    /api/recommendations           - Catalog, personalized via ?uid=
//! GET    /api/favorites/{uid}           - Favorited recipes
//! POST   /api/favorites/toggle          - Toggle favorite membership
//! ```

pub mod orders;
pub mod payments;
pub mod products;
pub mod recommendations;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create))
        .route("/{id}", get(users::show).patch(users::update))
        .route("/uid/{uid}", get(users::show_by_uid))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::delete),
        )
        .route("/business/{uid}", get(products::list_by_business))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/available", get(orders::list_available))
        .route("/customer/{uid}", get(orders::list_by_customer))
        .route("/business/{uid}", get(orders::list_by_business))
        .route("/driver/{uid}", get(orders::list_by_driver))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", axum::routing::patch(orders::update_status))
}

/// Create the payment routes router.
///
/// These sit directly under `/api` (not nested) because the mobile apps
/// call them at those historical paths.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(payments::create_intent))
        .route("/create-qpay-payment", post(payments::create_qpay))
        .route("/check-payment/{id}", get(payments::check))
        .route("/stripe-checkout", post(payments::checkout))
        .route("/stripe-static-checkout", get(payments::static_checkout))
}

/// Create the recommendation routes router.
pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/recommendations", get(recommendations::list))
        .route("/favorites/{uid}", get(recommendations::favorites))
        .route("/favorites/toggle", post(recommendations::toggle_favorite))
}

/// Create all `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .merge(payment_routes())
        .merge(recommendation_routes())
}
