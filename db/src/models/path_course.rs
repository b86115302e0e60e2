use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// Join row placing one course at a position inside a learning path.
/// Unique on (path_id, course_id).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "path_courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub path_id: i64,
    pub course_id: i64,
    pub order_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::learning_path::Entity",
        from = "Column::PathId",
        to = "super::learning_path::Column::Id",
        on_delete = "Cascade"
    )]
    LearningPath,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::learning_path::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningPath.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn add(
        db: &DbConn,
        path_id: i64,
        course_id: i64,
        order_index: i32,
    ) -> Result<Model, DbErr> {
        let entry = ActiveModel {
            path_id: Set(path_id),
            course_id: Set(course_id),
            order_index: Set(order_index),
            ..Default::default()
        };

        entry.insert(db).await
    }

    pub async fn remove(db: &DbConn, path_id: i64, course_id: i64) -> Result<(), DbErr> {
        Entity::delete_many()
            .filter(Column::PathId.eq(path_id))
            .filter(Column::CourseId.eq(course_id))
            .exec(db)
            .await?;
        Ok(())
    }
}
