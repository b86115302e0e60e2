use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::learning_path::Model as LearningPath;
use db::models::path_course::Model as PathCourse;
use db::models::user_learning_path::Model as Membership;
use db::models::{course, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};

pub struct LearningPathSeeder;

#[async_trait]
impl Seeder for LearningPathSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let courses = course::Entity::find().all(db).await.unwrap_or_default();

        if courses.len() < 2 {
            println!("Warning: not enough courses found, skipping learning path seeding");
            return;
        }

        let path = LearningPath::create(
            db,
            "Backend Engineer Track",
            "Everything from language fundamentals to production APIs.",
        )
        .await
        .expect("Failed to seed learning path");

        for (order, course) in courses.iter().enumerate() {
            PathCourse::add(db, path.id, course.id, order as i32 + 1)
                .await
                .expect("Failed to seed path course");
        }

        let students = user::Entity::find()
            .filter(user::Column::Role.eq(user::Role::Student))
            .limit(2)
            .all(db)
            .await
            .unwrap_or_default();

        for student in students {
            Membership::start(db, student.id, path.id)
                .await
                .expect("Failed to seed path membership");
        }
    }
}
