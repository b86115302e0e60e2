use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::quiz::Model as QuizModel;
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::courses::quizzes::common::QuizRequest;

/// POST /courses/{course_id}/quizzes
///
/// Adds a quiz to the course. Gated by `require_course_manager`. Questions
/// are added afterwards through `/quizzes/{quiz_id}/questions`.
pub async fn create_quiz(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<QuizRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Empty>::error(format_validation_errors(
                &validation_errors,
            ))),
        )
            .into_response();
    }

    match QuizModel::create(app_state.db(), course_id, &req.title, req.pass_score).await {
        Ok(quiz) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                quiz,
                format!("Quiz '{}' created! Add questions.", req.title),
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to create quiz: {e}"
            ))),
        )
            .into_response(),
    }
}
