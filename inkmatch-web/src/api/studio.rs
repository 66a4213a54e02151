//! Artist studio endpoints
//!
//! All routes here act on behalf of the authenticated user resolved by the
//! [`ActingUser`](super::ActingUser) extractor; ownership of the targeted
//! tattoo is enforced in the core catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use inkmatch_core::models::{ArtistProfile, Tattoo, TattooPatch, TattooUpload};

use super::{ActingUser, ApiError};
use crate::AppState;

/// PUT /api/studio/profile response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub artist_id: String,
}

/// POST /api/studio/tattoos response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub tattoo_id: String,
}

/// PUT /api/studio/profile
///
/// Create or update the acting user's artist profile (upsert keyed on the
/// user id).
pub async fn upsert_profile(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Json(profile): Json<ArtistProfile>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let artist_id = state.catalog.upsert_artist(&user_id, profile).await?;
    Ok(Json(ProfileResponse { artist_id }))
}

/// GET /api/studio/tattoos
pub async fn my_tattoos(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
) -> Result<Json<Vec<Tattoo>>, ApiError> {
    Ok(Json(state.catalog.my_tattoos(&user_id).await?))
}

/// POST /api/studio/tattoos
pub async fn upload_tattoo(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Json(upload): Json<TattooUpload>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let tattoo_id = state.catalog.upload_tattoo(&user_id, upload).await?;
    Ok((StatusCode::CREATED, Json(UploadResponse { tattoo_id })))
}

/// PATCH /api/studio/tattoos/:id
pub async fn update_tattoo(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(tattoo_id): Path<String>,
    Json(patch): Json<TattooPatch>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog
        .update_tattoo(&user_id, &tattoo_id, patch)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/studio/tattoos/:id
pub async fn delete_tattoo(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(tattoo_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_tattoo(&user_id, &tattoo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
