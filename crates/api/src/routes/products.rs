//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use tavag_core::{ProductId, UserRole};

use crate::error::{ApiError, Result};
use crate::models::{CreateProduct, Product, ProductPatch};
use crate::state::AppState;

/// Create a product.
///
/// POST /api/products
///
/// The owning `businessId` must resolve to a business-role account; the
/// dashboards have no way to create a product for someone else, so a miss
/// here means a stale or forged reference.
///
/// # Errors
///
/// 404 if the business is unknown, 400 if the account is not a business.
#[instrument(skip(state, params), fields(business_id = %params.business_id))]
pub async fn create(
    State(state): State<AppState>,
    Json(params): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let owner = state
        .users()
        .get_by_uid(&params.business_id)?
        .ok_or_else(|| ApiError::NotFound(format!("business {}", params.business_id)))?;
    if owner.role != UserRole::Business {
        return Err(ApiError::BadRequest(format!(
            "user {} is not a business account",
            params.business_id
        )));
    }

    let product = state.products().create(params)?;
    tracing::info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Fetch a product.
///
/// GET /api/products/{id}
///
/// # Errors
///
/// 404 if the ID is unknown.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Product>> {
    let product = state
        .products()
        .get(ProductId::new(id))?
        .ok_or_else(|| ApiError::NotFound(format!("product {id}")))?;
    Ok(Json(product))
}

/// List one business's products.
///
/// GET /api/products/business/{uid}
pub async fn list_by_business(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products().list_by_business(&uid)?))
}

/// Apply a partial product update.
///
/// PATCH /api/products/{id}
///
/// # Errors
///
/// 404 if the ID is unknown.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product = state.products().update(ProductId::new(id), patch)?;
    Ok(Json(product))
}

/// Delete a product.
///
/// DELETE /api/products/{id}
///
/// # Errors
///
/// 404 if the ID is unknown.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    state.products().delete(ProductId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}
