use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::learning_path::Model as PathModel;
use util::state::AppState;
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::paths::common::PathRequest;

/// PUT /paths/{path_id}
///
/// Edits a path's title and description. Admin gated.
pub async fn edit_path(
    State(app_state): State<AppState>,
    Path(path_id): Path<i64>,
    Json(req): Json<PathRequest>,
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

    let db = app_state.db();

    if let Ok(None) | Err(_) = PathModel::get_by_id(db, path_id).await {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Learning path not found")),
        )
            .into_response();
    }

    match PathModel::edit(db, path_id, &req.title, &req.description).await {
        Ok(path) => (
            StatusCode::OK,
            Json(ApiResponse::success(path, "Path updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to update path: {e}"
            ))),
        )
            .into_response(),
    }
}
