use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::Model as UserModel;
use serde::Serialize;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;

#[derive(Debug, Serialize, Default)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// GET /auth/me
///
/// Profile of the authenticated caller. The token is verified by the
/// `AuthUser` extractor itself, so no guard middleware is needed here.
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    match UserModel::get_by_id(app_state.db(), claims.sub).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ProfileResponse {
                    id: user.id,
                    username: user.username,
                    email: user.email,
                    role: user.role.to_string(),
                },
                "Profile fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<ProfileResponse>::error("User not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<ProfileResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
