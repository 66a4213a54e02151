//! Request identity extractors
//!
//! Two separate identities flow through the API:
//! - the anonymous viewer id, minted client-side and sent on browsing and
//!   like routes; a missing header degrades to a fresh ephemeral id with an
//!   empty history rather than an error
//! - the authenticated user id on studio routes, supplied by the external
//!   identity provider fronting this service; required

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use inkmatch_core::ViewerId;

use super::ApiError;

/// Header carrying the anonymous viewer id
pub const VIEWER_ID_HEADER: &str = "x-viewer-id";
/// Header carrying the authenticated user id for studio routes
pub const USER_ID_HEADER: &str = "x-user-id";

/// Viewer identity for browsing and like routes
pub struct Viewer(pub ViewerId);

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let viewer = parts
            .headers
            .get(VIEWER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| ViewerId::new(id.to_string()))
            .unwrap_or_else(ViewerId::generate);
        Ok(Viewer(viewer))
    }
}

/// Authenticated user identity for studio routes
pub struct ActingUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| ActingUser(id.to_string()))
            .ok_or(ApiError::MissingIdentity)
    }
}
