//! User route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use tavag_core::UserId;

use crate::error::{ApiError, Result};
use crate::models::{CreateUser, User, UserPatch};
use crate::state::AppState;

/// Register a user.
///
/// POST /api/users
///
/// # Errors
///
/// 409 if the external `uid` is already registered.
#[instrument(skip(state, params), fields(uid = %params.uid))]
pub async fn create(
    State(state): State<AppState>,
    Json(params): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.users().create(params)?;
    tracing::info!(user_id = %user.id, role = %user.role, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetch a user by store-assigned ID.
///
/// GET /api/users/{id}
///
/// # Errors
///
/// 404 if the ID is unknown.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<User>> {
    let user = state
        .users()
        .get(UserId::new(id))?
        .ok_or_else(|| ApiError::NotFound(format!("user {id}")))?;
    Ok(Json(user))
}

/// Fetch a user by external auth ID.
///
/// GET /api/users/uid/{uid}
///
/// # Errors
///
/// 404 if no user carries the uid.
pub async fn show_by_uid(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<User>> {
    let user = state
        .users()
        .get_by_uid(&uid)?
        .ok_or_else(|| ApiError::NotFound(format!("user with uid {uid}")))?;
    Ok(Json(user))
}

/// Apply a partial profile update.
///
/// PATCH /api/users/{id}
///
/// # Errors
///
/// 404 if the ID is unknown, 400 for an empty patch.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>> {
    if patch.is_empty() {
        return Err(ApiError::BadRequest(
            "update contains no fields".to_string(),
        ));
    }
    let user = state.users().update(UserId::new(id), patch)?;
    Ok(Json(user))
}
