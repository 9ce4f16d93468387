//! Recommendation and favorites route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use tavag_core::RecipeId;

use crate::error::Result;
use crate::models::Recipe;
use crate::state::AppState;

/// Query parameters for the recommendation list.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    /// When present, reorder the catalog by this user's preference tags.
    pub uid: Option<String>,
}

/// List recipe recommendations.
///
/// GET /api/recommendations?uid=...
///
/// An unknown or absent uid falls back to catalog order rather than
/// erroring; the home screen renders either way.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Vec<Recipe>>> {
    let preferences = match query.uid {
        Some(uid) => state
            .users()
            .get_by_uid(&uid)?
            .map(|user| user.preferences)
            .unwrap_or_default(),
        None => Vec::new(),
    };
    Ok(Json(state.recommendations().list(&preferences)?))
}

/// List a user's favorited recipes.
///
/// GET /api/favorites/{uid}
pub async fn favorites(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Recipe>>> {
    Ok(Json(state.recommendations().favorites_for(&uid)?))
}

/// Request to toggle a favorite.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteRequest {
    pub user_id: String,
    pub recipe_id: RecipeId,
}

/// Response from toggling a favorite.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    /// The resulting membership state.
    pub favorited: bool,
}

/// Toggle a favorite recipe.
///
/// POST /api/favorites/toggle
///
/// # Errors
///
/// 404 if the recipe is not in the catalog.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Json(params): Json<ToggleFavoriteRequest>,
) -> Result<Json<ToggleFavoriteResponse>> {
    let favorited = state
        .recommendations()
        .toggle_favorite(&params.user_id, params.recipe_id)?;
    Ok(Json(ToggleFavoriteResponse { favorited }))
}
