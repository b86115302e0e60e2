//! Course creation, enrollment, and certificate issuance handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::format_validation_errors;
use db::models::certificate::{IssueError, Model as CertificateModel};
use db::models::course::Model as CourseModel;
use db::models::enrollment::Model as EnrollmentModel;
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::courses::common::CourseRequest;

/// POST /courses
///
/// Creates a course owned by the caller. The `allow_instructor` guard has
/// already established that the caller may author courses.
pub async fn create_course(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
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

    match CourseModel::create(
        app_state.db(),
        claims.sub,
        &req.title,
        &req.description,
        req.price,
    )
    .await
    {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(course, "Course created successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to create course: {e}"
            ))),
        )
            .into_response(),
    }
}

/// POST /courses/{course_id}/enroll
///
/// Enrolls the caller in the course. Idempotent: repeating the request
/// returns the existing enrollment unchanged.
pub async fn enroll(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(course_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    let course = match CourseModel::get_by_id(db, course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Course not found")),
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

    match EnrollmentModel::get_or_create(db, claims.sub, course_id).await {
        Ok(enrollment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                enrollment,
                format!("Welcome to the {} program", course.title),
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to enroll: {e}"
            ))),
        )
            .into_response(),
    }
}

/// POST /courses/{course_id}/certificate
///
/// Issues (or re-returns) the caller's certificate for the course. Requires
/// the caller's enrollment to stand at 100% progress; otherwise nothing is
/// written and the rejection reason is returned.
pub async fn generate_certificate(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(course_id): Path<i64>,
) -> Response {
    match CertificateModel::issue(app_state.db(), claims.sub, course_id).await {
        Ok(certificate) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                certificate,
                "Certificate issued successfully",
            )),
        )
            .into_response(),
        Err(err @ IssueError::NotEnrolled) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error(err.to_string())),
        )
            .into_response(),
        Err(err @ IssueError::CourseIncomplete { .. }) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<Empty>::error(err.to_string())),
        )
            .into_response(),
        Err(IssueError::Db(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::claims::Claims;
    use axum::body::to_bytes;
    use db::models::user::{Model as UserModel, Role};
    use db::test_utils::setup_test_db;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::Value;

    fn claims_for(user: &UserModel) -> AuthUser {
        AuthUser(Claims {
            sub: user.id,
            role: user.role,
            exp: 9999999999,
        })
    }

    async fn response_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn enroll_twice_keeps_one_row() {
        let state = AppState::new(setup_test_db().await);
        let instructor =
            UserModel::create(state.db(), "inst", "inst@example.com", "password1", Role::Instructor)
                .await
                .unwrap();
        let student =
            UserModel::create(state.db(), "stud", "stud@example.com", "password2", Role::Student)
                .await
                .unwrap();
        let course = CourseModel::create(state.db(), instructor.id, "Rust", "", 0.0)
            .await
            .unwrap();

        for _ in 0..2 {
            let response = enroll(
                State(state.clone()),
                claims_for(&student),
                Path(course.id),
            )
            .await;
            let (status, json) = response_json(response).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["success"], true);
        }

        assert_eq!(
            db::models::Enrollment::find().count(state.db()).await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn certificate_requires_full_progress() {
        let state = AppState::new(setup_test_db().await);
        let instructor =
            UserModel::create(state.db(), "inst2", "inst2@example.com", "password1", Role::Instructor)
                .await
                .unwrap();
        let student =
            UserModel::create(state.db(), "stud2", "stud2@example.com", "password2", Role::Student)
                .await
                .unwrap();
        let course = CourseModel::create(state.db(), instructor.id, "SQL", "", 0.0)
            .await
            .unwrap();
        EnrollmentModel::get_or_create(state.db(), student.id, course.id)
            .await
            .unwrap();
        EnrollmentModel::set_progress(state.db(), student.id, course.id, 60)
            .await
            .unwrap();

        let response = generate_certificate(
            State(state.clone()),
            claims_for(&student),
            Path(course.id),
        )
        .await;
        let (status, json) = response_json(response).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);
        assert_eq!(
            db::models::Certificate::find().count(state.db()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn certificate_issuance_is_idempotent() {
        let state = AppState::new(setup_test_db().await);
        let instructor =
            UserModel::create(state.db(), "inst3", "inst3@example.com", "password1", Role::Instructor)
                .await
                .unwrap();
        let student =
            UserModel::create(state.db(), "stud3", "stud3@example.com", "password2", Role::Student)
                .await
                .unwrap();
        let course = CourseModel::create(state.db(), instructor.id, "Nets", "", 0.0)
            .await
            .unwrap();
        EnrollmentModel::get_or_create(state.db(), student.id, course.id)
            .await
            .unwrap();
        EnrollmentModel::set_progress(state.db(), student.id, course.id, 100)
            .await
            .unwrap();

        let mut tokens = Vec::new();
        for _ in 0..2 {
            let response = generate_certificate(
                State(state.clone()),
                claims_for(&student),
                Path(course.id),
            )
            .await;
            let (status, json) = response_json(response).await;
            assert_eq!(status, StatusCode::OK);
            tokens.push(json["data"]["certificate_id"].as_str().unwrap().to_string());
        }

        assert_eq!(tokens[0], tokens[1]);
        assert_eq!(
            db::models::Certificate::find().count(state.db()).await.unwrap(),
            1
        );
    }
}
