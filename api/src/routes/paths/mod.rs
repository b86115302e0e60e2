//! # Learning Path Routes Module
//!
//! Defines and wires up routes for the `/api/paths` endpoint group: curated
//! multi-course curricula and their derived per-user progress.

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use crate::auth::guards::allow_admin;
use delete::{delete_path, remove_path_course};
use get::{get_path, get_path_progress, get_paths};
use post::{add_path_course, create_path, start_path};
use put::edit_path;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/paths` route group.
///
/// Routes:
/// - `GET    /paths`                                → list paths (public)
/// - `GET    /paths/{path_id}`                      → path with ordered courses (public)
/// - `POST   /paths`                                → create a path (admin)
/// - `PUT    /paths/{path_id}`                      → edit a path (admin)
/// - `DELETE /paths/{path_id}`                      → delete a path (admin)
/// - `POST   /paths/{path_id}/courses`              → place a course in the path (admin)
/// - `DELETE /paths/{path_id}/courses/{course_id}`  → remove a course from the path (admin)
/// - `POST   /paths/{path_id}/enroll`               → start the path (authenticated)
/// - `GET    /paths/{path_id}/progress`             → the caller's derived progress (authenticated)
pub fn path_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_paths))
        .route("/{path_id}", get(get_path))
        .route("/", post(create_path).route_layer(from_fn(allow_admin)))
        .route(
            "/{path_id}",
            put(edit_path).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{path_id}",
            delete(delete_path).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{path_id}/courses",
            post(add_path_course).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{path_id}/courses/{course_id}",
            delete(remove_path_course).route_layer(from_fn(allow_admin)),
        )
        .route("/{path_id}/enroll", post(start_path))
        .route("/{path_id}/progress", get(get_path_progress))
}
