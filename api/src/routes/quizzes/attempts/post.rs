use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::question::AnswerOption;
use db::models::quiz::Model as QuizModel;
use db::models::quiz_attempt::Model as AttemptModel;
use std::collections::HashMap;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::quizzes::common::{QuizResultResponse, TakeQuizRequest};

/// POST /quizzes/{quiz_id}/attempts
///
/// Grades the submitted answers against the quiz and appends one immutable
/// attempt record. Unanswered questions count as wrong; a duplicate answer
/// for the same question keeps the last one submitted.
pub async fn take_quiz(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(quiz_id): Path<i64>,
    Json(req): Json<TakeQuizRequest>,
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

    let answers: HashMap<i64, AnswerOption> = req
        .answers
        .into_iter()
        .map(|a| (a.question_id, a.selected))
        .collect();

    match AttemptModel::submit(db, claims.sub, &quiz, &answers).await {
        Ok((attempt, outcome)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                QuizResultResponse {
                    quiz_id: quiz.id,
                    correct_count: outcome.correct_count,
                    total: outcome.total,
                    percentage: outcome.percentage,
                    passed: attempt.passed,
                },
                "Quiz graded successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!(
                "Failed to record attempt: {e}"
            ))),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::claims::Claims;
    use crate::routes::quizzes::common::AnswerSubmission;
    use axum::body::to_bytes;
    use db::models::course::Model as CourseModel;
    use db::models::question::Model as QuestionModel;
    use db::models::user::{Model as UserModel, Role};
    use db::test_utils::setup_test_db;
    use serde_json::Value;

    #[tokio::test]
    async fn grading_three_of_four_at_pass_score_70() {
        let state = AppState::new(setup_test_db().await);
        let db = state.db();

        let instructor = UserModel::create(db, "qinst", "qinst@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let student = UserModel::create(db, "qstud", "qstud@example.com", "password2", Role::Student)
            .await
            .unwrap();
        let course = CourseModel::create(db, instructor.id, "Rust", "", 0.0).await.unwrap();
        let quiz = QuizModel::create(db, course.id, "Final", 70).await.unwrap();

        let mut question_ids = Vec::new();
        for correct in [AnswerOption::A, AnswerOption::B, AnswerOption::C, AnswerOption::D] {
            let q = QuestionModel::create(db, quiz.id, "q", "a", "b", "c", "d", correct)
                .await
                .unwrap();
            question_ids.push((q.id, correct));
        }

        // Answer the first three correctly and leave the last unanswered.
        let answers = question_ids[..3]
            .iter()
            .map(|&(question_id, selected)| AnswerSubmission {
                question_id,
                selected,
            })
            .collect();

        let response = take_quiz(
            State(state.clone()),
            AuthUser(Claims {
                sub: student.id,
                role: Role::Student,
                exp: 9999999999,
            }),
            Path(quiz.id),
            Json(TakeQuizRequest { answers }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["data"]["percentage"], 75);
        assert_eq!(json["data"]["passed"], true);
        assert_eq!(json["data"]["correct_count"], 3);

        let history = AttemptModel::for_user_quiz(db, student.id, quiz.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, 75);
        assert!(history[0].passed);
    }
}
