use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quiz_attempt::Model as AttemptModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// GET /quizzes/{quiz_id}/attempts
///
/// The caller's own attempt history for this quiz, newest first.
pub async fn get_attempts(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(quiz_id): Path<i64>,
) -> Response {
    match AttemptModel::for_user_quiz(app_state.db(), claims.sub, quiz_id).await {
        Ok(attempts) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                attempts,
                "Attempts fetched successfully",
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
