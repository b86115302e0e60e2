use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::course;
use db::models::question::{AnswerOption, Model as Question};
use db::models::quiz::Model as Quiz;
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct QuizSeeder;

#[async_trait]
impl Seeder for QuizSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let courses = course::Entity::find().all(db).await.unwrap_or_default();

        if courses.is_empty() {
            println!("Warning: no courses found, skipping quiz seeding");
            return;
        }

        let options = [
            AnswerOption::A,
            AnswerOption::B,
            AnswerOption::C,
            AnswerOption::D,
        ];

        for course in &courses {
            let quiz = Quiz::create(db, course.id, &format!("{} final quiz", course.title), 70)
                .await
                .expect("Failed to seed quiz");

            for n in 1..=4 {
                let correct = options[fastrand::usize(..options.len())];
                Question::create(
                    db,
                    quiz.id,
                    &format!("Question {n} for {}", course.title),
                    "First option",
                    "Second option",
                    "Third option",
                    "Fourth option",
                    correct,
                )
                .await
                .expect("Failed to seed question");
            }
        }
    }
}
