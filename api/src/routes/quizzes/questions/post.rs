use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::question::Model as QuestionModel;
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::quizzes::common::QuestionRequest;

/// POST /quizzes/{quiz_id}/questions
///
/// Adds a four-option question to the quiz. Gated by `require_quiz_manager`,
/// which also guarantees the quiz exists.
pub async fn create_question(
    State(app_state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Json(req): Json<QuestionRequest>,
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

    match QuestionModel::create(
        app_state.db(),
        quiz_id,
        &req.text,
        &req.option_a,
        &req.option_b,
        &req.option_c,
        &req.option_d,
        req.correct_option,
    )
    .await
    {
        Ok(question) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(question, "Question added!")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to add question: {e}"
            ))),
        )
            .into_response(),
    }
}
