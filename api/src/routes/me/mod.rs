//! # Me Routes Module
//!
//! Dashboard data for the authenticated caller: enrollments, certificates,
//! and learning paths with derived progress. The whole group sits behind
//! `allow_authenticated`.

use axum::{Router, routing::get};
use util::state::AppState;

use get::{get_my_certificates, get_my_enrollments, get_my_paths};

pub mod get;

/// Builds the `/me` route group.
///
/// Routes:
/// - `GET /me/enrollments`  → the caller's enrollments with their courses
/// - `GET /me/certificates` → the caller's issued certificates
/// - `GET /me/paths`        → the caller's paths with derived progress
pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/enrollments", get(get_my_enrollments))
        .route("/certificates", get(get_my_certificates))
        .route("/paths", get(get_my_paths))
}
