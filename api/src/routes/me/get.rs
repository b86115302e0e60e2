use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use db::models::certificate::Model as CertificateModel;
use db::models::user_learning_path::Model as MembershipModel;
use db::models::{course, enrollment, learning_path};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;

#[derive(Serialize)]
pub struct EnrollmentWithCourse {
    #[serde(flatten)]
    pub enrollment: enrollment::Model,
    pub course: Option<course::Model>,
}

#[derive(Serialize)]
pub struct MyPathEntry {
    pub path: learning_path::Model,
    pub progress: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// GET /me/enrollments
///
/// The caller's enrollments joined with their courses, most recently
/// accessed first.
pub async fn get_my_enrollments(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let result = enrollment::Entity::find()
        .filter(enrollment::Column::StudentId.eq(claims.sub))
        .order_by_desc(enrollment::Column::LastAccessed)
        .find_also_related(course::Entity)
        .all(app_state.db())
        .await;

    match result {
        Ok(rows) => {
            let enrollments: Vec<EnrollmentWithCourse> = rows
                .into_iter()
                .map(|(enrollment, course)| EnrollmentWithCourse { enrollment, course })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    enrollments,
                    "Enrollments fetched successfully",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /me/certificates
///
/// Every certificate issued to the caller.
pub async fn get_my_certificates(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match CertificateModel::for_user(app_state.db(), claims.sub).await {
        Ok(certificates) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                certificates,
                "Certificates fetched successfully",
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

/// GET /me/paths
///
/// The caller's learning paths with their derived progress, recomputed on
/// this read.
pub async fn get_my_paths(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    let db = app_state.db();

    let memberships = match MembershipModel::for_user(db, claims.sub).await {
        Ok(memberships) => memberships,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let mut entries = Vec::with_capacity(memberships.len());
    for membership in memberships {
        let lookup = async {
            let Some(path) = learning_path::Model::get_by_id(db, membership.path_id).await? else {
                return Ok(None);
            };
            let progress =
                MembershipModel::refresh_completion(db, claims.sub, membership.path_id).await?;
            // Re-read the membership in case the refresh just stamped it.
            let membership = MembershipModel::find_for(db, claims.sub, membership.path_id)
                .await?
                .unwrap_or(membership);
            Ok::<_, sea_orm::DbErr>(Some((path, progress, membership)))
        };

        match lookup.await {
            Ok(Some((path, progress, membership))) => entries.push(MyPathEntry {
                path,
                progress,
                started_at: membership.started_at,
                completed_at: membership.completed_at,
            }),
            Ok(None) => {}
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
                )
                    .into_response();
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(entries, "Paths fetched successfully")),
    )
        .into_response()
}
