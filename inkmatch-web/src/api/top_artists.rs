//! Top-artists ranking endpoint

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use inkmatch_core::models::RankedArtist;
use inkmatch_core::recommend::DEFAULT_TOP_ARTISTS;

use super::{ApiError, Viewer};
use crate::AppState;

/// Query parameters for the ranking
#[derive(Debug, Deserialize)]
pub struct TopArtistsParams {
    /// Maximum entries to return (default 5)
    pub limit: Option<usize>,
}

/// GET /api/top-artists[?limit=N]
///
/// An empty array is the legitimate "not enough data yet" answer for a
/// viewer with no (resolvable) likes; failures use error status codes.
pub async fn get_top_artists(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Query(params): Query<TopArtistsParams>,
) -> Result<Json<Vec<RankedArtist>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_ARTISTS);
    Ok(Json(state.recommender.top_artists(&viewer, limit).await?))
}
