//! Public catalog reads plus the caller's issued certificate.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::certificate::Model as CertificateModel;
use db::models::course::Model as CourseModel;
use db::models::lesson::Model as LessonModel;
use db::models::module::Model as ModuleModel;
use db::models::quiz::Model as QuizModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::courses::common::{CourseDetailResponse, CourseSummary, ModuleWithLessons};

/// GET /courses
///
/// Public catalog listing: every course with its module count.
pub async fn get_courses(State(app_state): State<AppState>) -> Response {
    let db = app_state.db();

    let courses = match CourseModel::get_all(db).await {
        Ok(courses) => courses,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let mut summaries = Vec::with_capacity(courses.len());
    for course in courses {
        let modules_count = match course.module_count(db).await {
            Ok(count) => count,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
                )
                    .into_response();
            }
        };
        summaries.push(CourseSummary {
            course,
            modules_count,
        });
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(summaries, "Courses fetched successfully")),
    )
        .into_response()
}

/// GET /courses/{course_id}
///
/// Public course page: the course, its ordered modules with their ordered
/// lessons, and its quizzes.
pub async fn get_course(
    State(app_state): State<AppState>,
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

    let detail = async {
        let mut modules = Vec::new();
        for module in ModuleModel::for_course(db, course_id).await? {
            let lessons = LessonModel::for_module(db, module.id).await?;
            modules.push(ModuleWithLessons { module, lessons });
        }
        let quizzes = QuizModel::for_course(db, course_id).await?;
        Ok::<_, sea_orm::DbErr>(CourseDetailResponse {
            course,
            modules,
            quizzes,
        })
    };

    match detail.await {
        Ok(detail) => (
            StatusCode::OK,
            Json(ApiResponse::success(detail, "Course fetched successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /courses/{course_id}/lessons/{lesson_id}
///
/// Public lesson view. The lesson must belong to the course in the path,
/// otherwise the response is a plain not-found.
pub async fn get_lesson(
    State(app_state): State<AppState>,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
) -> Response {
    match LessonModel::get_in_course(app_state.db(), course_id, lesson_id).await {
        Ok(Some(lesson)) => (
            StatusCode::OK,
            Json(ApiResponse::success(lesson, "Lesson fetched successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Lesson not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /courses/{course_id}/certificate
///
/// Returns the caller's already-issued certificate for this course, if any.
/// Issuance itself goes through the POST handler.
pub async fn get_certificate(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(course_id): Path<i64>,
) -> Response {
    match CertificateModel::find_for(app_state.db(), claims.sub, course_id).await {
        Ok(Some(certificate)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                certificate,
                "Certificate fetched successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error(
                "No certificate has been issued for this course",
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
