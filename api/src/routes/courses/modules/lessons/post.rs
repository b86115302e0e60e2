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

/// POST /courses/{course_id}/modules/{module_id}/lessons
///
/// Adds a lesson to the module. Gated by `require_course_manager`.
pub async fn create_lesson(
    State(app_state): State<AppState>,
    Path((course_id, module_id)): Path<(i64, i64)>,
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

    match LessonModel::create(
        app_state.db(),
        module.id,
        &req.title,
        req.content.as_deref(),
        req.video_url.as_deref(),
        req.order_index,
    )
    .await
    {
        Ok(lesson) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(lesson, "Lesson added successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to add lesson: {e}"
            ))),
        )
            .into_response(),
    }
}
