use axum::{Json, http::StatusCode};
use db::models::module::Model as ModuleModel;
use sea_orm::DbConn;
use serde::Deserialize;
use validator::Validate;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct ModuleRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,

    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub order_index: i32,
}

/// Resolves `{module_id}` and confirms it belongs to `{course_id}`; a module
/// reached through the wrong course path is treated as not found.
pub async fn module_in_course(
    db: &DbConn,
    course_id: i64,
    module_id: i64,
) -> Result<ModuleModel, (StatusCode, Json<ApiResponse<Empty>>)> {
    match ModuleModel::get_by_id(db, module_id).await {
        Ok(Some(module)) if module.course_id == course_id => Ok(module),
        Ok(_) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Module not found")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        )),
    }
}
