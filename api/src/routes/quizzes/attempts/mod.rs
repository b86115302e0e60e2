//! Quiz attempt routes nested under `/quizzes/{quiz_id}/attempts`.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::get_attempts;
use post::take_quiz;

pub mod get;
pub mod post;

/// Builds the `/quizzes/{quiz_id}/attempts` route group.
///
/// Routes:
/// - `POST /` → submit answers, grade, and record an attempt (authenticated)
/// - `GET  /` → the caller's attempt history for this quiz (authenticated)
pub fn attempt_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(take_quiz))
        .route("/", get(get_attempts))
}
