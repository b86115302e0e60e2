use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,

    #[validate(range(min = 0, max = 100, message = "Pass score must be between 0 and 100"))]
    pub pass_score: i32,
}
