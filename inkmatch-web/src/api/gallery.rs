//! Gallery browsing endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use inkmatch_core::models::{Artist, Tattoo};
use inkmatch_core::Error as CoreError;

use super::ApiError;
use crate::AppState;

/// Query parameters for tattoo listing
#[derive(Debug, Deserialize)]
pub struct TattooListQuery {
    /// Restrict the listing to one artist's work
    pub artist_id: Option<String>,
}

/// GET /api/artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, ApiError> {
    Ok(Json(state.catalog.artists().await?))
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Artist>, ApiError> {
    state
        .catalog
        .artist(&id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(format!("artist {id}")).into())
}

/// GET /api/tattoos[?artist_id=...]
pub async fn list_tattoos(
    State(state): State<AppState>,
    Query(query): Query<TattooListQuery>,
) -> Result<Json<Vec<Tattoo>>, ApiError> {
    let tattoos = match query.artist_id.as_deref() {
        Some(artist_id) => state.catalog.tattoos_by_artist(artist_id).await?,
        None => state.catalog.tattoos().await?,
    };
    Ok(Json(tattoos))
}
