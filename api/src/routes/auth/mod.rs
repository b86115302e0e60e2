//! # Auth Routes Module
//!
//! Authentication endpoints: registration, login, and the caller's own
//! profile. Token verification for other route groups lives in
//! `crate::auth`, not here.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::get_me;
use post::{login, register};

pub mod get;
pub mod post;

/// Builds the `/auth` route group.
///
/// Routes:
/// - `POST /auth/register` → create an account and return a JWT
/// - `POST /auth/login` → verify credentials and return a JWT
/// - `GET  /auth/me` → profile of the authenticated caller
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me))
}
