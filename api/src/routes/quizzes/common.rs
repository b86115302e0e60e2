//! Request and response DTOs shared by the `/quizzes` handlers.

use db::models::question::{self, AnswerOption};
use db::models::quiz;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A question as shown to a quiz taker: the correct option is withheld.
#[derive(Serialize)]
pub struct QuestionPublic {
    pub id: i64,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
}

impl From<question::Model> for QuestionPublic {
    fn from(q: question::Model) -> Self {
        Self {
            id: q.id,
            text: q.text,
            option_a: q.option_a,
            option_b: q.option_b,
            option_c: q.option_c,
            option_d: q.option_d,
        }
    }
}

/// Quiz page for a taker.
#[derive(Serialize)]
pub struct QuizTakeResponse {
    pub quiz: quiz::Model,
    pub questions: Vec<QuestionPublic>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(length(min = 1, message = "Question text is required"))]
    pub text: String,

    #[validate(length(min = 1, max = 200, message = "Option A must be 1 to 200 characters"))]
    pub option_a: String,

    #[validate(length(min = 1, max = 200, message = "Option B must be 1 to 200 characters"))]
    pub option_b: String,

    #[validate(length(min = 1, max = 200, message = "Option C must be 1 to 200 characters"))]
    pub option_c: String,

    #[validate(length(min = 1, max = 200, message = "Option D must be 1 to 200 characters"))]
    pub option_d: String,

    pub correct_option: AnswerOption,
}

/// One selected answer within a submission. Questions left unanswered are
/// simply omitted.
#[derive(Debug, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: i64,
    pub selected: AnswerOption,
}

#[derive(Debug, Deserialize)]
pub struct TakeQuizRequest {
    pub answers: Vec<AnswerSubmission>,
}

/// Graded result returned to the taker.
#[derive(Serialize)]
pub struct QuizResultResponse {
    pub quiz_id: i64,
    pub correct_count: usize,
    pub total: usize,
    pub percentage: i32,
    pub passed: bool,
}
