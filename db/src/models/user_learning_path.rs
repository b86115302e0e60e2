use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::QuerySelect;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use super::{enrollment, path_course};

/// A user's membership in a learning path. Progress is derived at read time
/// from the member courses' enrollment state and is never stored here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "user_learning_paths")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: i64,
    pub path_id: i64,
    pub started_at: DateTime<Utc>,
    /// Stamped once the derived progress first reads 100.
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::learning_path::Entity",
        from = "Column::PathId",
        to = "super::learning_path::Column::Id",
        on_delete = "Cascade"
    )]
    LearningPath,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::learning_path::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningPath.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Starts the path for a user, or returns the existing membership.
    /// Idempotent under the unique (user_id, path_id) index.
    pub async fn start(db: &DbConn, user_id: i64, path_id: i64) -> Result<Model, DbErr> {
        if let Some(existing) = Self::find_for(db, user_id, path_id).await? {
            return Ok(existing);
        }

        let membership = ActiveModel {
            user_id: Set(user_id),
            path_id: Set(path_id),
            started_at: Set(Utc::now()),
            completed_at: Set(None),
            ..Default::default()
        };

        match membership.insert(db).await {
            Ok(created) => Ok(created),
            Err(insert_err) => match Self::find_for(db, user_id, path_id).await? {
                Some(existing) => Ok(existing),
                None => Err(insert_err),
            },
        }
    }

    pub async fn find_for(db: &DbConn, user_id: i64, path_id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::PathId.eq(path_id))
            .one(db)
            .await
    }

    pub async fn for_user(db: &DbConn, user_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(Column::UserId.eq(user_id)).all(db).await
    }

    /// Derived path completion: `round(100 * completed / total)` where a
    /// member course counts as completed iff the user holds an enrollment in
    /// it at 100% progress. Recomputed on every call; a path with no courses
    /// reads as 0.
    pub async fn progress(db: &DbConn, user_id: i64, path_id: i64) -> Result<i32, DbErr> {
        let course_ids: Vec<i64> = path_course::Entity::find()
            .filter(path_course::Column::PathId.eq(path_id))
            .select_only()
            .column(path_course::Column::CourseId)
            .into_tuple()
            .all(db)
            .await?;

        let total = course_ids.len();
        if total == 0 {
            return Ok(0);
        }

        let completed = enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(user_id))
            .filter(enrollment::Column::CourseId.is_in(course_ids))
            .filter(enrollment::Column::Progress.eq(100))
            .count(db)
            .await?;

        Ok((100.0 * completed as f64 / total as f64).round() as i32)
    }

    /// Recomputes progress and stamps `completed_at` the first time it
    /// reaches 100. Returns the derived percentage.
    pub async fn refresh_completion(
        db: &DbConn,
        user_id: i64,
        path_id: i64,
    ) -> Result<i32, DbErr> {
        let progress = Self::progress(db, user_id, path_id).await?;

        if progress == 100 {
            if let Some(membership) = Self::find_for(db, user_id, path_id).await? {
                if membership.completed_at.is_none() {
                    let mut active = membership.into_active_model();
                    active.completed_at = Set(Some(Utc::now()));
                    active.update(db).await?;
                }
            }
        }

        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::Model as CourseModel;
    use crate::models::enrollment::Model as EnrollmentModel;
    use crate::models::learning_path::Model as PathModel;
    use crate::models::path_course::Model as PathCourseModel;
    use crate::models::user::{Model as UserModel, Role};
    use crate::test_utils::setup_test_db;

    async fn path_with_courses(db: &DbConn, count: usize) -> (UserModel, PathModel, Vec<CourseModel>) {
        let instructor = UserModel::create(db, "author", "author@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let student = UserModel::create(db, "walker", "walker@example.com", "password2", Role::Student)
            .await
            .unwrap();
        let path = PathModel::create(db, "Track", "").await.unwrap();

        let mut courses = Vec::new();
        for i in 0..count {
            let course = CourseModel::create(db, instructor.id, &format!("Course {i}"), "", 0.0)
                .await
                .unwrap();
            PathCourseModel::add(db, path.id, course.id, i as i32 + 1).await.unwrap();
            courses.push(course);
        }

        (student, path, courses)
    }

    #[tokio::test]
    async fn one_of_three_completed_reads_33() {
        let db = setup_test_db().await;
        let (student, path, courses) = path_with_courses(&db, 3).await;

        EnrollmentModel::get_or_create(&db, student.id, courses[0].id).await.unwrap();
        EnrollmentModel::set_progress(&db, student.id, courses[0].id, 100).await.unwrap();
        // A partially completed course does not count.
        EnrollmentModel::get_or_create(&db, student.id, courses[1].id).await.unwrap();
        EnrollmentModel::set_progress(&db, student.id, courses[1].id, 99).await.unwrap();

        assert_eq!(Model::progress(&db, student.id, path.id).await.unwrap(), 33);
    }

    #[tokio::test]
    async fn all_completed_reads_100_and_stamps_completed_at() {
        let db = setup_test_db().await;
        let (student, path, courses) = path_with_courses(&db, 3).await;
        Model::start(&db, student.id, path.id).await.unwrap();

        for course in &courses {
            EnrollmentModel::get_or_create(&db, student.id, course.id).await.unwrap();
            EnrollmentModel::set_progress(&db, student.id, course.id, 100).await.unwrap();
        }

        assert_eq!(
            Model::refresh_completion(&db, student.id, path.id).await.unwrap(),
            100
        );
        let membership = Model::find_for(&db, student.id, path.id).await.unwrap().unwrap();
        assert!(membership.completed_at.is_some());

        // A second refresh keeps the original stamp.
        let stamped = membership.completed_at;
        Model::refresh_completion(&db, student.id, path.id).await.unwrap();
        let again = Model::find_for(&db, student.id, path.id).await.unwrap().unwrap();
        assert_eq!(again.completed_at, stamped);
    }

    #[tokio::test]
    async fn empty_path_reads_zero() {
        let db = setup_test_db().await;
        let (student, path, _) = path_with_courses(&db, 0).await;

        assert_eq!(Model::progress(&db, student.id, path.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let db = setup_test_db().await;
        let (student, path, _) = path_with_courses(&db, 1).await;

        let first = Model::start(&db, student.id, path.id).await.unwrap();
        let second = Model::start(&db, student.id, path.id).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 1);
    }
}
