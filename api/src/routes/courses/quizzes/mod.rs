//! Quiz authoring routes nested under `/courses/{course_id}/quizzes`.
//!
//! Question authoring and quiz taking live in the top-level `/quizzes`
//! group; this group covers creating quizzes for a course and listing them.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::require_course_manager;
use get::get_quizzes;
use post::create_quiz;

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/courses/{course_id}/quizzes` route group.
///
/// Routes:
/// - `GET  /` → list the course's quizzes (public)
/// - `POST /` → add a quiz to the course (course manager)
pub fn course_quiz_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_quizzes))
        .route(
            "/",
            post(create_quiz)
                .route_layer(from_fn_with_state(app_state, require_course_manager)),
        )
}
