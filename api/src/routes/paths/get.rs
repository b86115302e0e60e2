use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::learning_path::Model as PathModel;
use db::models::user_learning_path::Model as MembershipModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::paths::common::{PathDetailResponse, PathProgressResponse};

/// GET /paths
///
/// Public listing of all learning paths.
pub async fn get_paths(State(app_state): State<AppState>) -> Response {
    match PathModel::get_all(app_state.db()).await {
        Ok(paths) => (
            StatusCode::OK,
            Json(ApiResponse::success(paths, "Paths fetched successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}

/// GET /paths/{path_id}
///
/// Public path page: the path and its member courses in display order.
pub async fn get_path(State(app_state): State<AppState>, Path(path_id): Path<i64>) -> Response {
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

    match PathModel::courses(db, path_id).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                PathDetailResponse { path, courses },
                "Path fetched successfully",
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

/// GET /paths/{path_id}/progress
///
/// The caller's derived completion percentage for the path, recomputed from
/// enrollment state on every call. Also stamps `completed_at` on the
/// membership the first time the value reads 100.
pub async fn get_path_progress(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(path_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    if let Ok(None) | Err(_) = PathModel::get_by_id(db, path_id).await {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Learning path not found")),
        )
            .into_response();
    }

    let progress = match MembershipModel::refresh_completion(db, claims.sub, path_id).await {
        Ok(progress) => progress,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    let membership = match MembershipModel::find_for(db, claims.sub, path_id).await {
        Ok(membership) => membership,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            PathProgressResponse {
                path_id,
                progress,
                started_at: membership.as_ref().map(|m| m.started_at),
                completed_at: membership.and_then(|m| m.completed_at),
            },
            "Path progress computed successfully",
        )),
    )
        .into_response()
}
