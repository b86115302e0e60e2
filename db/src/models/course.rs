use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// A course in the catalog, owned by exactly one instructor.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: String,
    /// Listed price; 0.0 means free.
    pub price: f64,
    /// Owning instructor (foreign key to `users`).
    pub instructor_id: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InstructorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Instructor,

    #[sea_orm(has_many = "super::module::Entity")]
    Module,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,

    #[sea_orm(has_many = "super::quiz::Entity")]
    Quiz,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a new course owned by `instructor_id`.
    pub async fn create(
        db: &DbConn,
        instructor_id: i64,
        title: &str,
        description: &str,
        price: f64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            price: Set(price),
            instructor_id: Set(instructor_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }

    /// Updates title, description and price of an existing course.
    ///
    /// Ownership never changes here; transferring a course to another
    /// instructor is not part of the authoring flow.
    pub async fn edit(
        db: &DbConn,
        id: i64,
        title: &str,
        description: &str,
        price: f64,
    ) -> Result<Model, DbErr> {
        let course = ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            price: Set(price),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        course.update(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn delete_by_id(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Number of modules attached to this course.
    pub async fn module_count(&self, db: &DbConn) -> Result<u64, DbErr> {
        super::module::Entity::find()
            .filter(super::module::Column::CourseId.eq(self.id))
            .count(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{Model as UserModel, Role};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_and_edit_course() {
        let db = setup_test_db().await;
        let instructor = UserModel::create(&db, "thandi", "thandi@example.com", "password1", Role::Instructor)
            .await
            .unwrap();

        let course = Model::create(&db, instructor.id, "Rust Basics", "Intro to Rust", 49.99)
            .await
            .unwrap();
        assert_eq!(course.instructor_id, instructor.id);
        assert_eq!(course.price, 49.99);

        let updated = Model::edit(&db, course.id, "Rust Basics", "Ownership and borrowing", 0.0)
            .await
            .unwrap();
        assert_eq!(updated.description, "Ownership and borrowing");
        assert_eq!(updated.price, 0.0);
    }

    #[tokio::test]
    async fn deleting_course_cascades_to_modules_and_lessons() {
        let db = setup_test_db().await;
        let instructor = UserModel::create(&db, "sipho", "sipho@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let course = Model::create(&db, instructor.id, "Networks", "", 0.0).await.unwrap();
        let module =
            crate::models::module::Model::create(&db, course.id, "Week 1", 1).await.unwrap();
        crate::models::lesson::Model::create(&db, module.id, "Sockets", Some("text"), None, 1)
            .await
            .unwrap();

        Model::delete_by_id(&db, course.id).await.unwrap();

        assert!(crate::models::module::Model::get_by_id(&db, module.id)
            .await
            .unwrap()
            .is_none());
        assert_eq!(
            crate::models::Lesson::find().count(&db).await.unwrap(),
            0
        );
    }
}
