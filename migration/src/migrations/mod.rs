pub mod m202607150001_create_users;
pub mod m202607150002_create_courses;
pub mod m202607150003_create_modules;
pub mod m202607150004_create_lessons;
pub mod m202607150005_create_enrollments;
pub mod m202607150006_create_quizzes;
pub mod m202607150007_create_questions;
pub mod m202607150008_create_quiz_attempts;
pub mod m202607150009_create_certificates;
pub mod m202607150010_create_learning_paths;
pub mod m202607150011_create_path_courses;
pub mod m202607150012_create_user_learning_paths;
