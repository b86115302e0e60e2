use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202607150001_create_users::Migration),
            Box::new(migrations::m202607150002_create_courses::Migration),
            Box::new(migrations::m202607150003_create_modules::Migration),
            Box::new(migrations::m202607150004_create_lessons::Migration),
            Box::new(migrations::m202607150005_create_enrollments::Migration),
            Box::new(migrations::m202607150006_create_quizzes::Migration),
            Box::new(migrations::m202607150007_create_questions::Migration),
            Box::new(migrations::m202607150008_create_quiz_attempts::Migration),
            Box::new(migrations::m202607150009_create_certificates::Migration),
            Box::new(migrations::m202607150010_create_learning_paths::Migration),
            Box::new(migrations::m202607150011_create_path_courses::Migration),
            Box::new(migrations::m202607150012_create_user_learning_paths::Migration),
        ]
    }
}
