//! inkmatch-web library - gallery JSON service
//!
//! HTTP surface over the core library: gallery browsing, like toggling,
//! top-artists ranking, and the artist studio routes.

use std::sync::Arc;

use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use inkmatch_core::catalog::Catalog;
use inkmatch_core::likes::LikeLedger;
use inkmatch_core::recommend::Recommender;
use inkmatch_core::store::DocumentStore;

pub mod api;
pub mod config;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub ledger: LikeLedger,
    pub recommender: Recommender,
}

impl AppState {
    /// Create application state over a document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            catalog: Catalog::new(store.clone()),
            ledger: LikeLedger::new(store.clone()),
            recommender: Recommender::new(store),
        }
    }
}

/// Build application router
///
/// Studio routes require the authenticated user id header; viewer routes
/// accept an optional viewer id header and fall back to an ephemeral
/// identity. Health needs neither.
pub fn build_router(state: AppState) -> Router {
    // Artist-side routes (authenticated user id required per handler)
    let studio = Router::new()
        .route("/api/studio/profile", put(api::studio::upsert_profile))
        .route(
            "/api/studio/tattoos",
            get(api::studio::my_tattoos).post(api::studio::upload_tattoo),
        )
        .route(
            "/api/studio/tattoos/:id",
            patch(api::studio::update_tattoo).delete(api::studio::delete_tattoo),
        );

    // Viewer-side routes
    let public = Router::new()
        .route("/api/artists", get(api::gallery::list_artists))
        .route("/api/artists/:id", get(api::gallery::get_artist))
        .route("/api/tattoos", get(api::gallery::list_tattoos))
        .route("/api/likes", get(api::likes::list_likes))
        .route("/api/likes/toggle", post(api::likes::toggle_like))
        .route("/api/likes/:tattoo_id", get(api::likes::like_status))
        .route("/api/top-artists", get(api::top_artists::get_top_artists))
        .merge(api::health_routes());

    Router::new()
        .merge(studio)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
