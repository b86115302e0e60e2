use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LessonRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,

    /// Text body for text-based lessons.
    pub content: Option<String>,

    #[validate(url(message = "Video URL must be a valid URL"))]
    pub video_url: Option<String>,

    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub order_index: i32,
}
