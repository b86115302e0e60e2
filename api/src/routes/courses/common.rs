//! Request and response DTOs shared by the `/courses` handlers.

use db::models::{course, lesson, module, quiz};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 3, max = 200, message = "Title must be 3 to 200 characters"))]
    pub title: String,

    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProgressRequest {
    #[validate(range(min = 0, max = 100, message = "Progress must be between 0 and 100"))]
    pub progress: i32,
}

/// Catalog listing entry: the course plus its module count.
#[derive(Serialize)]
pub struct CourseSummary {
    #[serde(flatten)]
    pub course: course::Model,
    pub modules_count: u64,
}

#[derive(Serialize)]
pub struct ModuleWithLessons {
    #[serde(flatten)]
    pub module: module::Model,
    pub lessons: Vec<lesson::Model>,
}

/// Full course page: ordered modules with their ordered lessons, plus the
/// course's quizzes.
#[derive(Serialize)]
pub struct CourseDetailResponse {
    pub course: course::Model,
    pub modules: Vec<ModuleWithLessons>,
    pub quizzes: Vec<quiz::Model>,
}
