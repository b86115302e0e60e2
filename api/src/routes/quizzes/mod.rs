//! # Quiz Routes Module
//!
//! Defines and wires up routes for the `/api/quizzes` endpoint group:
//! taking quizzes and authoring questions. Quiz creation lives under the
//! owning course's routes.

use axum::{Router, routing::get};
use util::state::AppState;

use attempts::attempt_routes;
use get::get_quiz;
use questions::question_routes;

pub mod attempts;
pub mod common;
pub mod get;
pub mod questions;

/// Builds the `/quizzes` route group.
///
/// Routes:
/// - `GET /quizzes/{quiz_id}` → quiz with its questions, answers withheld (authenticated)
///
/// - Nested question authoring under `/{quiz_id}/questions`
/// - Nested attempt routes under `/{quiz_id}/attempts`
pub fn quiz_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{quiz_id}", get(get_quiz))
        .nest("/{quiz_id}/questions", question_routes(app_state))
        .nest("/{quiz_id}/attempts", attempt_routes())
}
