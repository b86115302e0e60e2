use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::lesson::Model as LessonModel;
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::courses::modules::common::module_in_course;
use crate::routes::courses::modules::lessons::common::LessonRequest;

/// PUT /courses/{course_id}/modules/{module_id}/lessons/{lesson_id}
///
/// Edits a lesson. Gated by `require_course_manager`; the lesson must belong
/// to the module and course in the path.
pub async fn edit_lesson(
    State(app_state): State<AppState>,
    Path((course_id, module_id, lesson_id)): Path<(i64, i64, i64)>,
    Json(req): Json<LessonRequest>,
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

    let module = match module_in_course(app_state.db(), course_id, module_id).await {
        Ok(module) => module,
        Err(rejection) => return rejection.into_response(),
    };

    let lesson = match LessonModel::get_by_id(app_state.db(), lesson_id).await {
        Ok(Some(lesson)) if lesson.module_id == module.id => lesson,
        Ok(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Lesson not found")),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    match LessonModel::edit(
        app_state.db(),
        lesson.id,
        &req.title,
        req.content.as_deref(),
        req.video_url.as_deref(),
        req.order_index,
    )
    .await
    {
        Ok(lesson) => (
            StatusCode::OK,
            Json(ApiResponse::success(lesson, "Lesson updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to update lesson: {e}"
            ))),
        )
            .into_response(),
    }
}
