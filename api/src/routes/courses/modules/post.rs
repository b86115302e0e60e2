use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::module::Model as ModuleModel;
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::courses::modules::common::ModuleRequest;

/// POST /courses/{course_id}/modules
///
/// Adds a module to the course. Gated by `require_course_manager`.
pub async fn create_module(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<ModuleRequest>,
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

    match ModuleModel::create(app_state.db(), course_id, &req.title, req.order_index).await {
        Ok(module) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(module, "Module added successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to add module: {e}"
            ))),
        )
            .into_response(),
    }
}
