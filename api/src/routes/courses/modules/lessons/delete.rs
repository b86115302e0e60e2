use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lesson::Model as LessonModel;
use util::state::AppState;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::courses::modules::common::module_in_course;

/// DELETE /courses/{course_id}/modules/{module_id}/lessons/{lesson_id}
///
/// Deletes a lesson. Gated by `require_course_manager`.
pub async fn delete_lesson(
    State(app_state): State<AppState>,
    Path((course_id, module_id, lesson_id)): Path<(i64, i64, i64)>,
) -> Response {
    let module = match module_in_course(app_state.db(), course_id, module_id).await {
        Ok(module) => module,
        Err(rejection) => return rejection.into_response(),
    };

    match LessonModel::get_by_id(app_state.db(), lesson_id).await {
        Ok(Some(lesson)) if lesson.module_id == module.id => {
            match LessonModel::delete_by_id(app_state.db(), lesson.id).await {
                Ok(()) => (
                    StatusCode::OK,
                    Json(ApiResponse::success(Empty, "Lesson deleted successfully")),
                )
                    .into_response(),
                Err(e) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Empty>::error(format!(
                        "Failed to delete lesson: {e}"
                    ))),
                )
                    .into_response(),
            }
        }
        Ok(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Lesson not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
