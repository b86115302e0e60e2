//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain (authentication, catalog, assessment,
//! learning paths, dashboard), each protected via appropriate access control
//! middleware.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Authentication endpoints (register, login)
//! - `/courses` → Course catalog, content authoring, enrollment, certificates
//! - `/quizzes` → Quiz taking, question authoring, attempt history
//! - `/paths` → Learning path curation and derived progress
//! - `/me` → The caller's dashboard data

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    auth::auth_routes, courses::course_routes, health::health_routes, me::me_routes,
    paths::path_routes, quizzes::quiz_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod auth;
pub mod courses;
pub mod health;
pub mod me;
pub mod paths;
pub mod quizzes;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type and mounts
/// all core API routes under their respective base paths.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/courses", course_routes(app_state.clone()))
        .nest("/quizzes", quiz_routes(app_state))
        .nest("/paths", path_routes())
        .nest("/me", me_routes().route_layer(from_fn(allow_authenticated)))
}
