use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A multiple-choice question with four fixed options and exactly one
/// correct answer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub quiz_id: i64,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: AnswerOption,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One of the four answer slots of a question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Display, EnumString,
    Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "answer_option_type")]
#[strum(ascii_case_insensitive)]
pub enum AnswerOption {
    #[sea_orm(string_value = "A")]
    A,

    #[sea_orm(string_value = "B")]
    B,

    #[sea_orm(string_value = "C")]
    C,

    #[sea_orm(string_value = "D")]
    D,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id",
        on_delete = "Cascade"
    )]
    Quiz,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        quiz_id: i64,
        text: &str,
        option_a: &str,
        option_b: &str,
        option_c: &str,
        option_d: &str,
        correct_option: AnswerOption,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let question = ActiveModel {
            quiz_id: Set(quiz_id),
            text: Set(text.to_owned()),
            option_a: Set(option_a.to_owned()),
            option_b: Set(option_b.to_owned()),
            option_c: Set(option_c.to_owned()),
            option_d: Set(option_d.to_owned()),
            correct_option: Set(correct_option),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        question.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn for_quiz(db: &DbConn, quiz_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(Column::QuizId.eq(quiz_id)).all(db).await
    }
}
