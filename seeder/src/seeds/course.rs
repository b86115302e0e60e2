use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::course::Model as Course;
use db::models::lesson::Model as Lesson;
use db::models::module::Model as Module;
use db::models::user;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct CourseSeeder;

#[async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let instructors = user::Entity::find()
            .filter(user::Column::Role.eq(user::Role::Instructor))
            .all(db)
            .await
            .unwrap_or_default();

        if instructors.is_empty() {
            println!("Warning: no instructors found, skipping course seeding");
            return;
        }

        let catalog = [
            (
                "Rust Fundamentals",
                "Ownership, borrowing, and the type system from the ground up.",
                79.0,
                vec![
                    ("Getting started", vec!["Installing the toolchain", "Hello, cargo"]),
                    ("Ownership", vec!["Moves and copies", "Borrowing", "Lifetimes"]),
                ],
            ),
            (
                "Relational Databases",
                "Modeling, querying, and maintaining relational data.",
                49.0,
                vec![
                    ("The relational model", vec!["Tables and keys", "Normalization"]),
                    ("SQL in practice", vec!["Joins", "Transactions"]),
                ],
            ),
            (
                "Web API Design",
                "Designing and evolving HTTP APIs that last.",
                0.0,
                vec![("Foundations", vec!["Resources and verbs", "Status codes"])],
            ),
        ];

        for (i, (title, description, price, modules)) in catalog.into_iter().enumerate() {
            let instructor = &instructors[i % instructors.len()];
            let course = Course::create(db, instructor.id, title, description, price)
                .await
                .expect("Failed to seed course");

            for (module_order, (module_title, lessons)) in modules.into_iter().enumerate() {
                let module = Module::create(db, course.id, module_title, module_order as i32 + 1)
                    .await
                    .expect("Failed to seed module");

                for (lesson_order, lesson_title) in lessons.into_iter().enumerate() {
                    Lesson::create(
                        db,
                        module.id,
                        lesson_title,
                        Some("Lesson notes go here."),
                        None,
                        lesson_order as i32 + 1,
                    )
                    .await
                    .expect("Failed to seed lesson");
                }
            }
        }
    }
}
