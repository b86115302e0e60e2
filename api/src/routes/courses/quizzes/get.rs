use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quiz::Model as QuizModel;
use util::state::AppState;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// GET /courses/{course_id}/quizzes
///
/// Lists the quizzes attached to a course.
pub async fn get_quizzes(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Response {
    match QuizModel::for_course(app_state.db(), course_id).await {
        Ok(quizzes) => (
            StatusCode::OK,
            Json(ApiResponse::success(quizzes, "Quizzes fetched successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
