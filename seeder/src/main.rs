use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    course::CourseSeeder, enrollment::EnrollmentSeeder, learning_path::LearningPathSeeder,
    quiz::QuizSeeder, user::UserSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(QuizSeeder), "Quiz"),
        (Box::new(EnrollmentSeeder), "Enrollment"),
        (Box::new(LearningPathSeeder), "LearningPath"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
