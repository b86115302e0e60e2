use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// An ordered section of a course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub course_id: i64,
    pub title: String,
    /// Position within the course; listings sort ascending on this.
    pub order_index: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,

    #[sea_orm(has_many = "super::lesson::Entity")]
    Lesson,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        title: &str,
        order_index: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let module = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            order_index: Set(order_index),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        module.insert(db).await
    }

    pub async fn edit(
        db: &DbConn,
        id: i64,
        title: &str,
        order_index: i32,
    ) -> Result<Model, DbErr> {
        let module = ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            order_index: Set(order_index),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        module.update(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All modules of a course in their stable display order.
    pub async fn for_course(db: &DbConn, course_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::OrderIndex)
            .all(db)
            .await
    }

    pub async fn delete_by_id(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::Model as CourseModel;
    use crate::models::user::{Model as UserModel, Role};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn modules_listed_in_order() {
        let db = setup_test_db().await;
        let instructor = UserModel::create(&db, "ayesha", "ayesha@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let course = CourseModel::create(&db, instructor.id, "Databases", "", 0.0)
            .await
            .unwrap();

        Model::create(&db, course.id, "Transactions", 2).await.unwrap();
        Model::create(&db, course.id, "Relational model", 1).await.unwrap();
        Model::create(&db, course.id, "Indexing", 3).await.unwrap();

        let ordered = Model::for_course(&db, course.id).await.unwrap();
        let titles: Vec<&str> = ordered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Relational model", "Transactions", "Indexing"]);
    }
}
