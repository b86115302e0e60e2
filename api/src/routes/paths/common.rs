//! Request and response DTOs shared by the `/paths` handlers.

use chrono::{DateTime, Utc};
use db::models::{course, learning_path};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct PathRequest {
    #[validate(length(min = 3, max = 200, message = "Title must be 3 to 200 characters"))]
    pub title: String,

    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PathCourseRequest {
    pub course_id: i64,

    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub order_index: i32,
}

/// Path page: the path and its member courses in display order.
#[derive(Serialize)]
pub struct PathDetailResponse {
    pub path: learning_path::Model,
    pub courses: Vec<course::Model>,
}

/// The caller's standing in a path: derived percentage plus membership
/// timestamps when the path has been started.
#[derive(Serialize)]
pub struct PathProgressResponse {
    pub path_id: i64,
    pub progress: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}
