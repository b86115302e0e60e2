//! Lesson authoring routes nested under
//! `/courses/{course_id}/modules/{module_id}/lessons`.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, post, put},
};
use util::state::AppState;

use crate::auth::guards::require_course_manager;
use delete::delete_lesson;
use post::create_lesson;
use put::edit_lesson;

pub mod common;
pub mod delete;
pub mod post;
pub mod put;

/// Builds the lesson authoring routes. Reads go through the course detail
/// page and the public lesson view, so only mutations live here, all gated
/// by `require_course_manager`.
pub fn lesson_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_lesson))
        .route("/{lesson_id}", put(edit_lesson))
        .route("/{lesson_id}", delete(delete_lesson))
        .route_layer(from_fn_with_state(app_state, require_course_manager))
}
