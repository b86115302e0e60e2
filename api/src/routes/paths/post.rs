use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::course::Model as CourseModel;
use db::models::learning_path::Model as PathModel;
use db::models::path_course::Model as PathCourseModel;
use db::models::user_learning_path::Model as MembershipModel;
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::paths::common::{PathCourseRequest, PathRequest};

/// POST /paths
///
/// Creates a learning path. Admin gated.
pub async fn create_path(
    State(app_state): State<AppState>,
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

    match PathModel::create(app_state.db(), &req.title, &req.description).await {
        Ok(path) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(path, "Path created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to create path: {e}"
            ))),
        )
            .into_response(),
    }
}

/// POST /paths/{path_id}/courses
///
/// Places a course at a position within the path. Admin gated; each course
/// may appear in a path only once.
pub async fn add_path_course(
    State(app_state): State<AppState>,
    Path(path_id): Path<i64>,
    Json(req): Json<PathCourseRequest>,
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
    if let Ok(None) | Err(_) = CourseModel::get_by_id(db, req.course_id).await {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Course not found")),
        )
            .into_response();
    }

    match PathCourseModel::add(db, path_id, req.course_id, req.order_index).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(entry, "Course added to path")),
        )
            .into_response(),
        Err(e) if e.to_string().contains("path_courses") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(
                "Course is already part of this path",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to add course to path: {e}"
            ))),
        )
            .into_response(),
    }
}

/// POST /paths/{path_id}/enroll
///
/// Starts the path for the caller. Idempotent: repeating the request keeps
/// the original membership and its `started_at`.
pub async fn start_path(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(path_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    let path = match PathModel::get_by_id(db, path_id).await {
        Ok(Some(path)) => path,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Learning path not found")),
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

    match MembershipModel::start(db, claims.sub, path_id).await {
        Ok(membership) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                membership,
                format!("You have started the {} path", path.title),
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to start path: {e}"
            ))),
        )
            .into_response(),
    }
}
