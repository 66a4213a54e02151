//! HTTP API handlers for inkmatch-web

pub mod error;
pub mod gallery;
pub mod health;
pub mod identity;
pub mod likes;
pub mod studio;
pub mod top_artists;

pub use error::ApiError;
pub use health::health_routes;
pub use identity::{ActingUser, Viewer};
