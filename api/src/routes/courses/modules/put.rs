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
use crate::routes::courses::modules::common::{ModuleRequest, module_in_course};

/// PUT /courses/{course_id}/modules/{module_id}
///
/// Edits a module's title and position. Gated by `require_course_manager`.
pub async fn edit_module(
    State(app_state): State<AppState>,
    Path((course_id, module_id)): Path<(i64, i64)>,
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

    let module = match module_in_course(app_state.db(), course_id, module_id).await {
        Ok(module) => module,
        Err(rejection) => return rejection.into_response(),
    };

    match ModuleModel::edit(app_state.db(), module.id, &req.title, req.order_index).await {
        Ok(module) => (
            StatusCode::OK,
            Json(ApiResponse::success(module, "Module updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to update module: {e}"
            ))),
        )
            .into_response(),
    }
}
