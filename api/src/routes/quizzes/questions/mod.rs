//! Question authoring routes nested under `/quizzes/{quiz_id}/questions`.
//!
//! Both routes expose correct answers, so the whole group is gated by
//! `require_quiz_manager`.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::require_quiz_manager;
use get::get_questions;
use post::create_question;

pub mod get;
pub mod post;

/// Builds the `/quizzes/{quiz_id}/questions` route group.
///
/// Routes:
/// - `GET  /` → full question list including correct options (quiz manager)
/// - `POST /` → add a question (quiz manager)
pub fn question_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_questions))
        .route("/", post(create_question))
        .route_layer(from_fn_with_state(app_state, require_quiz_manager))
}
