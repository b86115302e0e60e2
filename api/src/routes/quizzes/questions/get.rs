use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::question::Model as QuestionModel;
use util::state::AppState;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// GET /quizzes/{quiz_id}/questions
///
/// Full question list for the authoring flow, correct options included.
/// Gated by `require_quiz_manager`.
pub async fn get_questions(
    State(app_state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> Response {
    match QuestionModel::for_quiz(app_state.db(), quiz_id).await {
        Ok(questions) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                questions,
                "Questions fetched successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
