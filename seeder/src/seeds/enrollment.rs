use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::enrollment::Model as Enrollment;
use db::models::{course, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct EnrollmentSeeder;

#[async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let students = user::Entity::find()
            .filter(user::Column::Role.eq(user::Role::Student))
            .all(db)
            .await
            .unwrap_or_default();
        let courses = course::Entity::find().all(db).await.unwrap_or_default();

        if students.is_empty() || courses.is_empty() {
            println!("Warning: no students or courses found, skipping enrollment seeding");
            return;
        }

        for (student_index, student) in students.iter().enumerate() {
            for (course_index, course) in courses.iter().enumerate() {
                // Enroll roughly two thirds of the pairs, with varied progress.
                if (student_index + course_index) % 3 == 2 {
                    continue;
                }

                Enrollment::get_or_create(db, student.id, course.id)
                    .await
                    .expect("Failed to seed enrollment");

                let progress = match (student_index + course_index) % 4 {
                    0 => 100,
                    1 => fastrand::i32(10..90),
                    2 => 0,
                    _ => fastrand::i32(50..100),
                };
                if progress > 0 {
                    Enrollment::set_progress(db, student.id, course.id, progress)
                        .await
                        .expect("Failed to seed enrollment progress");
                }
            }
        }
    }
}
