//! Like toggling and membership endpoints
//!
//! A failed toggle returns an error status and changes nothing; the client
//! keeps its current visual state and may retry.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use inkmatch_core::models::Like;

use super::{ApiError, Viewer};
use crate::AppState;

/// POST /api/likes/toggle request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub tattoo_id: String,
}

/// Resulting like state for toggle and membership responses
#[derive(Debug, Serialize)]
pub struct LikeStateResponse {
    pub liked: bool,
}

/// GET /api/likes
pub async fn list_likes(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
) -> Result<Json<Vec<Like>>, ApiError> {
    Ok(Json(state.ledger.get_likes(&viewer).await?))
}

/// POST /api/likes/toggle
pub async fn toggle_like(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<LikeStateResponse>, ApiError> {
    let liked = state.ledger.toggle_like(&viewer, &request.tattoo_id).await?;
    Ok(Json(LikeStateResponse { liked }))
}

/// GET /api/likes/:tattoo_id
pub async fn like_status(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(tattoo_id): Path<String>,
) -> Result<Json<LikeStateResponse>, ApiError> {
    let liked = state.ledger.is_liked(&viewer, &tattoo_id).await?;
    Ok(Json(LikeStateResponse { liked }))
}
