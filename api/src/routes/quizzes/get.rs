use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::question::Model as QuestionModel;
use db::models::quiz::Model as QuizModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::quizzes::common::{QuestionPublic, QuizTakeResponse};

/// GET /quizzes/{quiz_id}
///
/// The quiz as presented to a taker: metadata plus its questions with the
/// correct options withheld. Requires authentication but no content
/// management capability.
pub async fn get_quiz(
    State(app_state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(quiz_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    let quiz = match QuizModel::get_by_id(db, quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Quiz not found")),
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

    match QuestionModel::for_quiz(db, quiz_id).await {
        Ok(questions) => {
            let questions: Vec<QuestionPublic> =
                questions.into_iter().map(QuestionPublic::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    QuizTakeResponse { quiz, questions },
                    "Quiz fetched successfully",
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
