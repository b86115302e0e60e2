use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// A single lesson inside a module. Either `content` (text lesson),
/// `video_url`, or both may be present.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub module_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub video_url: Option<String>,
    /// Position within the module; listings sort ascending on this.
    pub order_index: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id",
        on_delete = "Cascade"
    )]
    Module,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        module_id: i64,
        title: &str,
        content: Option<&str>,
        video_url: Option<&str>,
        order_index: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let lesson = ActiveModel {
            module_id: Set(module_id),
            title: Set(title.to_owned()),
            content: Set(content.map(str::to_owned)),
            video_url: Set(video_url.map(str::to_owned)),
            order_index: Set(order_index),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        lesson.insert(db).await
    }

    pub async fn edit(
        db: &DbConn,
        id: i64,
        title: &str,
        content: Option<&str>,
        video_url: Option<&str>,
        order_index: i32,
    ) -> Result<Model, DbErr> {
        let lesson = ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            content: Set(content.map(str::to_owned)),
            video_url: Set(video_url.map(str::to_owned)),
            order_index: Set(order_index),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        lesson.update(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All lessons of a module in their stable display order.
    pub async fn for_module(db: &DbConn, module_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ModuleId.eq(module_id))
            .order_by_asc(Column::OrderIndex)
            .all(db)
            .await
    }

    /// Fetches a lesson only if it belongs to the given course, walking the
    /// lesson -> module -> course chain.
    pub async fn get_in_course(
        db: &DbConn,
        course_id: i64,
        lesson_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        let Some(lesson) = Entity::find_by_id(lesson_id).one(db).await? else {
            return Ok(None);
        };
        let Some(module) = super::module::Model::get_by_id(db, lesson.module_id).await? else {
            return Ok(None);
        };
        if module.course_id != course_id {
            return Ok(None);
        }
        Ok(Some(lesson))
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
    use crate::models::module::Model as ModuleModel;
    use crate::models::user::{Model as UserModel, Role};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn lesson_lookup_is_scoped_to_course() {
        let db = setup_test_db().await;
        let instructor = UserModel::create(&db, "lerato", "lerato@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let course_a = CourseModel::create(&db, instructor.id, "A", "", 0.0).await.unwrap();
        let course_b = CourseModel::create(&db, instructor.id, "B", "", 0.0).await.unwrap();
        let module_a = ModuleModel::create(&db, course_a.id, "M1", 1).await.unwrap();

        let lesson = Model::create(&db, module_a.id, "Intro", Some("hello"), None, 1)
            .await
            .unwrap();

        assert!(Model::get_in_course(&db, course_a.id, lesson.id)
            .await
            .unwrap()
            .is_some());
        assert!(Model::get_in_course(&db, course_b.id, lesson.id)
            .await
            .unwrap()
            .is_none());
    }
}
