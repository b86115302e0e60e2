use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// DELETE /courses/{course_id}
///
/// Deletes a course; modules, lessons, quizzes and questions go with it via
/// cascading foreign keys. Gated by `require_course_manager`.
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Response {
    match CourseModel::delete_by_id(app_state.db(), course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Course deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to delete course: {e}"
            ))),
        )
            .into_response(),
    }
}
