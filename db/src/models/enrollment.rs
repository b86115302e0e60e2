use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::IntoActiveModel;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// Links one student to one course, with a mutable completion percentage.
///
/// Unique on (student_id, course_id); enrollments are never deleted in the
/// normal flow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub course_id: i64,
    /// Completion percentage in 0..=100. Set through `set_progress`, not
    /// derived from per-lesson tracking.
    pub progress: i32,
    pub completed: bool,
    pub last_accessed: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Finds the enrollment for (student, course), creating it at 0% if it
    /// does not exist yet.
    ///
    /// Concurrent duplicate requests are resolved by the unique index on
    /// (student_id, course_id): a losing insert re-fetches the winner's row.
    pub async fn get_or_create(
        db: &DbConn,
        student_id: i64,
        course_id: i64,
    ) -> Result<Model, DbErr> {
        if let Some(existing) = Self::find_for(db, student_id, course_id).await? {
            return Ok(existing);
        }

        let now = Utc::now();
        let enrollment = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            progress: Set(0),
            completed: Set(false),
            last_accessed: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match enrollment.insert(db).await {
            Ok(created) => Ok(created),
            // Lost the race against a concurrent enroll; the unique index
            // guarantees exactly one row, so fetch that one.
            Err(insert_err) => match Self::find_for(db, student_id, course_id).await? {
                Some(existing) => {
                    tracing::debug!(student_id, course_id, "enroll insert lost race, reusing row");
                    Ok(existing)
                }
                None => Err(insert_err),
            },
        }
    }

    pub async fn find_for(
        db: &DbConn,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await
    }

    /// Sets the completion percentage for an existing enrollment.
    ///
    /// The value is clamped to 0..=100, `completed` tracks whether the clamped
    /// value is 100, and `last_accessed` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns `DbErr::RecordNotFound` if the student is not enrolled in the
    /// course.
    pub async fn set_progress(
        db: &DbConn,
        student_id: i64,
        course_id: i64,
        progress: i32,
    ) -> Result<Model, DbErr> {
        let Some(enrollment) = Self::find_for(db, student_id, course_id).await? else {
            return Err(DbErr::RecordNotFound(format!(
                "no enrollment for student {student_id} in course {course_id}"
            )));
        };

        let clamped = progress.clamp(0, 100);
        let now = Utc::now();

        let mut active = enrollment.into_active_model();
        active.progress = Set(clamped);
        active.completed = Set(clamped == 100);
        active.last_accessed = Set(now);
        active.updated_at = Set(now);

        active.update(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::Model as CourseModel;
    use crate::models::user::{Model as UserModel, Role};
    use crate::test_utils::setup_test_db;
    use sea_orm::PaginatorTrait;

    async fn student_and_course(db: &DbConn) -> (UserModel, CourseModel) {
        let instructor = UserModel::create(db, "teach", "teach@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let student = UserModel::create(db, "learn", "learn@example.com", "password2", Role::Student)
            .await
            .unwrap();
        let course = CourseModel::create(db, instructor.id, "Algorithms", "", 0.0)
            .await
            .unwrap();
        (student, course)
    }

    #[tokio::test]
    async fn enroll_is_idempotent() {
        let db = setup_test_db().await;
        let (student, course) = student_and_course(&db).await;

        let first = Model::get_or_create(&db, student.id, course.id).await.unwrap();
        let second = Model::get_or_create(&db, student.id, course.id).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(first.progress, 0);
        assert!(!first.completed);
    }

    #[tokio::test]
    async fn set_progress_clamps_and_flags_completion() {
        let db = setup_test_db().await;
        let (student, course) = student_and_course(&db).await;
        Model::get_or_create(&db, student.id, course.id).await.unwrap();

        let over = Model::set_progress(&db, student.id, course.id, 180).await.unwrap();
        assert_eq!(over.progress, 100);
        assert!(over.completed);

        let back = Model::set_progress(&db, student.id, course.id, 40).await.unwrap();
        assert_eq!(back.progress, 40);
        assert!(!back.completed);
    }

    #[tokio::test]
    async fn set_progress_without_enrollment_is_not_found() {
        let db = setup_test_db().await;
        let (student, course) = student_and_course(&db).await;

        let err = Model::set_progress(&db, student.id, course.id, 50).await.unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }
}
