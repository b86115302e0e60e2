use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use super::{course, path_course};

/// An ordered curriculum of multiple courses.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "learning_paths")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::path_course::Entity")]
    PathCourse,
}

impl Related<super::path_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PathCourse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, title: &str, description: &str) -> Result<Model, DbErr> {
        let now = Utc::now();
        let path = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        path.insert(db).await
    }

    pub async fn edit(db: &DbConn, id: i64, title: &str, description: &str) -> Result<Model, DbErr> {
        let path = ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        path.update(db).await
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

    /// Member courses in their stable display order.
    pub async fn courses(db: &DbConn, path_id: i64) -> Result<Vec<course::Model>, DbErr> {
        let pairs = path_course::Entity::find()
            .filter(path_course::Column::PathId.eq(path_id))
            .order_by_asc(path_course::Column::OrderIndex)
            .find_also_related(course::Entity)
            .all(db)
            .await?;

        Ok(pairs.into_iter().filter_map(|(_, c)| c).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::path_course::Model as PathCourseModel;
    use crate::models::user::{Model as UserModel, Role};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn courses_follow_path_order_not_insertion_order() {
        let db = setup_test_db().await;
        let instructor = UserModel::create(&db, "curator", "cur@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let path = Model::create(&db, "Backend track", "From zero to deploy").await.unwrap();

        let c1 = course::Model::create(&db, instructor.id, "Rust", "", 0.0).await.unwrap();
        let c2 = course::Model::create(&db, instructor.id, "SQL", "", 0.0).await.unwrap();

        PathCourseModel::add(&db, path.id, c1.id, 2).await.unwrap();
        PathCourseModel::add(&db, path.id, c2.id, 1).await.unwrap();

        let ordered = Model::courses(&db, path.id).await.unwrap();
        let titles: Vec<&str> = ordered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["SQL", "Rust"]);
    }
}
