use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::learning_path::Model as PathModel;
use db::models::path_course::Model as PathCourseModel;
use util::state::AppState;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// DELETE /paths/{path_id}
///
/// Deletes a learning path and its course placements. Admin gated. Member
/// courses themselves are untouched.
pub async fn delete_path(
    State(app_state): State<AppState>,
    Path(path_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    if let Ok(None) | Err(_) = PathModel::get_by_id(db, path_id).await {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Learning path not found")),
        )
            .into_response();
    }

    match PathModel::delete_by_id(db, path_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Path deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to delete path: {e}"
            ))),
        )
            .into_response(),
    }
}

/// DELETE /paths/{path_id}/courses/{course_id}
///
/// Removes a course from the path. Admin gated. Enrollments in the course
/// itself are untouched; only the path placement goes away.
pub async fn remove_path_course(
    State(app_state): State<AppState>,
    Path((path_id, course_id)): Path<(i64, i64)>,
) -> Response {
    match PathCourseModel::remove(app_state.db(), path_id, course_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Course removed from path")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to remove course from path: {e}"
            ))),
        )
            .into_response(),
    }
}
