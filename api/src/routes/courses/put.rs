//! Course edits and enrollment progress updates.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::course::Model as CourseModel;
use db::models::enrollment::Model as EnrollmentModel;
use sea_orm::DbErr;
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::courses::common::{CourseRequest, ProgressRequest};

/// PUT /courses/{course_id}
///
/// Edits a course's catalog fields. The `require_course_manager` guard has
/// already resolved the course and checked the capability predicate.
pub async fn edit_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<CourseRequest>,
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

    match CourseModel::edit(
        app_state.db(),
        course_id,
        &req.title,
        &req.description,
        req.price,
    )
    .await
    {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(course, "Course updated successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to update course: {e}"
            ))),
        )
            .into_response(),
    }
}

/// PUT /courses/{course_id}/progress
///
/// Sets the caller's own completion percentage for the course. Progress is
/// an externally settable field here; it is not derived from per-lesson
/// tracking.
pub async fn update_progress(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(course_id): Path<i64>,
    Json(req): Json<ProgressRequest>,
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

    match EnrollmentModel::set_progress(app_state.db(), claims.sub, course_id, req.progress).await
    {
        Ok(enrollment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                enrollment,
                "Progress updated successfully",
            )),
        )
            .into_response(),
        Err(DbErr::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error(
                "You are not enrolled in this course",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
