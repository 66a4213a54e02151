//! Integration tests for the inkmatch-web API
//!
//! Each test drives the full router over a fresh in-memory SQLite store,
//! seeding data through the studio routes exactly as a client would.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use inkmatch_core::store::SqliteStore;
use inkmatch_web::{build_router, AppState};

/// Test helper: fresh app over an empty in-memory store
async fn setup_app() -> Router {
    let store = Arc::new(SqliteStore::in_memory().await.expect("in-memory store"));
    build_router(AppState::new(store))
}

/// Test helper: request without a body
fn get_request(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Test helper: request with a JSON body
fn json_request(
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    body: Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn profile(name: &str) -> Value {
    json!({ "name": name, "location": "Amsterdam" })
}

fn upload(description: &str) -> Value {
    json!({
        "imageUrl": format!("https://img.example/{description}.jpg"),
        "description": description,
        "price": 150.0,
        "size": "Medium",
        "style": "Fine line"
    })
}

/// Test helper: create a profile and upload tattoos for one user.
/// Returns the artist id and the uploaded tattoo ids.
async fn seed_artist(app: &Router, user: &str, name: &str, tattoos: &[&str]) -> (String, Vec<String>) {
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/studio/profile",
            &[("x-user-id", user)],
            profile(name),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let artist_id = extract_json(response.into_body()).await["artistId"]
        .as_str()
        .unwrap()
        .to_string();

    let mut tattoo_ids = Vec::new();
    for description in tattoos {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/studio/tattoos",
                &[("x-user-id", user)],
                upload(description),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = extract_json(response.into_body()).await;
        tattoo_ids.push(body["tattooId"].as_str().unwrap().to_string());
    }
    (artist_id, tattoo_ids)
}

async fn toggle(app: &Router, viewer: &str, tattoo_id: &str) -> bool {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/likes/toggle",
            &[("x-viewer-id", viewer)],
            json!({ "tattooId": tattoo_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    extract_json(response.into_body()).await["liked"]
        .as_bool()
        .unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_requires_no_identity() {
    let app = setup_app().await;

    let response = app.oneshot(get_request("/health", &[])).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "inkmatch-web");
    assert!(body["version"].is_string());
}

// =============================================================================
// Studio identity and profile upsert
// =============================================================================

#[tokio::test]
async fn test_studio_without_user_header_is_unauthorized() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/studio/profile", &[], profile("Vera")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(get_request("/api/studio/tattoos", &[]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_upsert_is_keyed_on_user_id() {
    let app = setup_app().await;

    let (first_id, _) = seed_artist(&app, "user-1", "Vera", &[]).await;
    let (second_id, _) = seed_artist(&app, "user-1", "Vera B.", &[]).await;
    assert_eq!(first_id, second_id);

    let response = app.oneshot(get_request("/api/artists", &[])).await.unwrap();
    let artists = extract_json(response.into_body()).await;
    assert_eq!(artists.as_array().unwrap().len(), 1);
    assert_eq!(artists[0]["name"], "Vera B.");
}

#[tokio::test]
async fn test_blank_profile_name_is_rejected() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/studio/profile",
            &[("x-user-id", "user-1")],
            profile("   "),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Tattoo upload validation
// =============================================================================

#[tokio::test]
async fn test_upload_without_profile_is_not_found() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/studio/tattoos",
            &[("x-user-id", "user-without-profile")],
            upload("rose"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_with_zero_price_is_rejected_before_write() {
    let app = setup_app().await;
    seed_artist(&app, "user-1", "Vera", &[]).await;

    let mut bad = upload("rose");
    bad["price"] = json!(0);
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/studio/tattoos",
            &[("x-user-id", "user-1")],
            bad,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("price"));

    // nothing was written
    let response = app.oneshot(get_request("/api/tattoos", &[])).await.unwrap();
    let tattoos = extract_json(response.into_body()).await;
    assert!(tattoos.as_array().unwrap().is_empty());
}

// =============================================================================
// Gallery browsing
// =============================================================================

#[tokio::test]
async fn test_missing_artist_is_not_found() {
    let app = setup_app().await;

    let response = app
        .oneshot(get_request("/api/artists/nope", &[]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tattoo_listing_filters_by_artist() {
    let app = setup_app().await;
    let (vera_id, _) = seed_artist(&app, "user-1", "Vera", &["rose", "fern"]).await;
    seed_artist(&app, "user-2", "Joost", &["skull"]).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/tattoos", &[]))
        .await
        .unwrap();
    let all = extract_json(response.into_body()).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let uri = format!("/api/tattoos?artist_id={vera_id}");
    let response = app.oneshot(get_request(&uri, &[])).await.unwrap();
    let veras = extract_json(response.into_body()).await;
    assert_eq!(veras.as_array().unwrap().len(), 2);
    assert!(veras
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["artistId"] == json!(vera_id)));
}

// =============================================================================
// Like toggling
// =============================================================================

#[tokio::test]
async fn test_toggle_flips_and_status_follows() {
    let app = setup_app().await;
    let (_, tattoos) = seed_artist(&app, "user-1", "Vera", &["rose"]).await;
    let tattoo = tattoos[0].as_str();

    assert!(toggle(&app, "viewer-1", tattoo).await);

    let uri = format!("/api/likes/{tattoo}");
    let response = app
        .clone()
        .oneshot(get_request(&uri, &[("x-viewer-id", "viewer-1")]))
        .await
        .unwrap();
    assert_eq!(extract_json(response.into_body()).await["liked"], true);

    assert!(!toggle(&app, "viewer-1", tattoo).await);

    let response = app
        .clone()
        .oneshot(get_request("/api/likes", &[("x-viewer-id", "viewer-1")]))
        .await
        .unwrap();
    let likes = extract_json(response.into_body()).await;
    assert!(likes.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_likes_without_viewer_header_are_ephemeral() {
    let app = setup_app().await;
    let (_, tattoos) = seed_artist(&app, "user-1", "Vera", &["rose"]).await;

    // A headerless toggle lands under a generated id the next request
    // cannot see; the like list stays empty for every fresh identity.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/likes/toggle",
            &[],
            json!({ "tattooId": tattoos[0] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request("/api/likes", &[]))
        .await
        .unwrap();
    let likes = extract_json(response.into_body()).await;
    assert!(likes.as_array().unwrap().is_empty());
}

// =============================================================================
// Top artists
// =============================================================================

#[tokio::test]
async fn test_top_artists_empty_without_history() {
    let app = setup_app().await;

    let response = app
        .oneshot(get_request("/api/top-artists", &[("x-viewer-id", "fresh")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ranked = extract_json(response.into_body()).await;
    assert!(ranked.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_top_artists_ranked_by_like_count() {
    let app = setup_app().await;
    let (vera_id, vera_tattoos) = seed_artist(&app, "user-1", "Vera", &["rose", "fern"]).await;
    let (joost_id, joost_tattoos) = seed_artist(&app, "user-2", "Joost", &["skull"]).await;

    for tattoo in vera_tattoos.iter().chain(&joost_tattoos) {
        assert!(toggle(&app, "viewer-1", tattoo).await);
    }

    let response = app
        .clone()
        .oneshot(get_request("/api/top-artists", &[("x-viewer-id", "viewer-1")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ranked = extract_json(response.into_body()).await;
    let entries = ranked.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["artist"]["id"], json!(vera_id));
    assert_eq!(entries[0]["likedTattoos"], 2);
    assert_eq!(entries[0]["artist"]["name"], "Vera");
    assert_eq!(entries[1]["artist"]["id"], json!(joost_id));
    assert_eq!(entries[1]["likedTattoos"], 1);

    // limit parameter is honored
    let response = app
        .oneshot(get_request(
            "/api/top-artists?limit=1",
            &[("x-viewer-id", "viewer-1")],
        ))
        .await
        .unwrap();
    let ranked = extract_json(response.into_body()).await;
    assert_eq!(ranked.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleted_tattoos_drop_out_of_ranking() {
    let app = setup_app().await;
    let (_, tattoos) = seed_artist(&app, "user-1", "Vera", &["rose", "fern"]).await;

    for tattoo in &tattoos {
        toggle(&app, "viewer-1", tattoo).await;
    }

    let uri = format!("/api/studio/tattoos/{}", tattoos[0]);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .header("x-user-id", "user-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request("/api/top-artists", &[("x-viewer-id", "viewer-1")]))
        .await
        .unwrap();
    let ranked = extract_json(response.into_body()).await;
    assert_eq!(ranked.as_array().unwrap()[0]["likedTattoos"], 1);
}

// =============================================================================
// Ownership enforcement
// =============================================================================

#[tokio::test]
async fn test_update_by_non_owner_is_forbidden() {
    let app = setup_app().await;
    let (_, tattoos) = seed_artist(&app, "user-1", "Vera", &["rose"]).await;
    seed_artist(&app, "user-2", "Joost", &[]).await;

    let uri = format!("/api/studio/tattoos/{}", tattoos[0]);
    let response = app
        .oneshot(json_request(
            "PATCH",
            &uri,
            &[("x-user-id", "user-2")],
            json!({ "price": 300.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_of_absent_tattoo_is_not_found() {
    let app = setup_app().await;
    seed_artist(&app, "user-1", "Vera", &[]).await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            "/api/studio/tattoos/missing",
            &[("x-user-id", "user-1")],
            json!({ "price": 300.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owner_can_update_and_delete() {
    let app = setup_app().await;
    let (_, tattoos) = seed_artist(&app, "user-1", "Vera", &["rose"]).await;
    let uri = format!("/api/studio/tattoos/{}", tattoos[0]);

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &uri,
            &[("x-user-id", "user-1")],
            json!({ "price": 300.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request("/api/studio/tattoos", &[("x-user-id", "user-1")]))
        .await
        .unwrap();
    let mine = extract_json(response.into_body()).await;
    assert_eq!(mine[0]["price"], 300.0);
    // untouched fields survive the patch
    assert_eq!(mine[0]["description"], "rose");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .header("x-user-id", "user-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request("/api/studio/tattoos", &[("x-user-id", "user-1")]))
        .await
        .unwrap();
    let mine = extract_json(response.into_body()).await;
    assert!(mine.as_array().unwrap().is_empty());
}
