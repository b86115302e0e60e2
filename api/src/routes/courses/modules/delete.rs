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
use crate::routes::courses::modules::common::module_in_course;

/// DELETE /courses/{course_id}/modules/{module_id}
///
/// Deletes a module and, via cascade, its lessons. Gated by
/// `require_course_manager`.
pub async fn delete_module(
    State(app_state): State<AppState>,
    Path((course_id, module_id)): Path<(i64, i64)>,
) -> Response {
    let module = match module_in_course(app_state.db(), course_id, module_id).await {
        Ok(module) => module,
        Err(rejection) => return rejection.into_response(),
    };

    match ModuleModel::delete_by_id(app_state.db(), module.id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Module deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to delete module: {e}"
            ))),
        )
            .into_response(),
    }
}
