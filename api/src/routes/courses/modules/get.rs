use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::module::Model as ModuleModel;
use util::state::AppState;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// GET /courses/{course_id}/modules
///
/// Ordered module list for a course.
pub async fn get_modules(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Response {
    match ModuleModel::for_course(app_state.db(), course_id).await {
        Ok(modules) => (
            StatusCode::OK,
            Json(ApiResponse::success(modules, "Modules fetched successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
