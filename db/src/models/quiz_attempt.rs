use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::question::{self, AnswerOption};
use super::quiz;

/// An immutable, append-only snapshot of one graded quiz submission.
///
/// `score` is the rounded percentage at the time of the attempt; `passed`
/// records the comparison against the quiz's pass score as it stood then.
/// Rows are never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "quiz_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: i64,
    pub quiz_id: i64,
    /// Rounded percentage in 0..=100.
    pub score: i32,
    pub passed: bool,

    pub created_at: DateTime<Utc>,
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
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id",
        on_delete = "Cascade"
    )]
    Quiz,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Result of grading one submission, before it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeOutcome {
    pub correct_count: usize,
    pub total: usize,
    /// `round(100 * correct / total)`, 0 when the quiz has no questions.
    pub percentage: i32,
}

/// Grades a submission against the quiz's questions.
///
/// A question counts as correct iff the submitted answer for its id equals
/// its `correct_option`; an unanswered question never matches. A quiz with
/// zero questions grades to 0%.
pub fn grade(questions: &[question::Model], answers: &HashMap<i64, AnswerOption>) -> GradeOutcome {
    let total = questions.len();
    let correct_count = questions
        .iter()
        .filter(|q| answers.get(&q.id) == Some(&q.correct_option))
        .count();

    let percentage = if total == 0 {
        0
    } else {
        (100.0 * correct_count as f64 / total as f64).round() as i32
    };

    GradeOutcome {
        correct_count,
        total,
        percentage,
    }
}

impl Model {
    /// Grades `answers` against the quiz and appends one attempt row.
    ///
    /// Prior attempts are never touched; many attempts per (user, quiz) are
    /// allowed.
    pub async fn submit(
        db: &DbConn,
        user_id: i64,
        quiz: &quiz::Model,
        answers: &HashMap<i64, AnswerOption>,
    ) -> Result<(Model, GradeOutcome), DbErr> {
        let questions = question::Model::for_quiz(db, quiz.id).await?;
        let outcome = grade(&questions, answers);
        let passed = outcome.percentage >= quiz.pass_score;

        let attempt = ActiveModel {
            user_id: Set(user_id),
            quiz_id: Set(quiz.id),
            score: Set(outcome.percentage),
            passed: Set(passed),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let attempt = attempt.insert(db).await?;
        Ok((attempt, outcome))
    }

    /// A user's attempts at one quiz, newest first.
    pub async fn for_user_quiz(
        db: &DbConn,
        user_id: i64,
        quiz_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::QuizId.eq(quiz_id))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::Model as CourseModel;
    use crate::models::user::{Model as UserModel, Role};
    use crate::test_utils::setup_test_db;

    fn question_with(id: i64, correct: AnswerOption) -> question::Model {
        question::Model {
            id,
            quiz_id: 1,
            text: format!("Question {id}"),
            option_a: "a".into(),
            option_b: "b".into(),
            option_c: "c".into(),
            option_d: "d".into(),
            correct_option: correct,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn all_correct_scores_100() {
        let questions = vec![
            question_with(1, AnswerOption::A),
            question_with(2, AnswerOption::C),
        ];
        let answers = HashMap::from([(1, AnswerOption::A), (2, AnswerOption::C)]);

        let outcome = grade(&questions, &answers);
        assert_eq!(outcome.correct_count, 2);
        assert_eq!(outcome.percentage, 100);
    }

    #[test]
    fn unanswered_questions_never_match() {
        let questions = vec![
            question_with(1, AnswerOption::A),
            question_with(2, AnswerOption::B),
            question_with(3, AnswerOption::D),
        ];
        // Only one answered, and answered correctly.
        let answers = HashMap::from([(1, AnswerOption::A)]);

        let outcome = grade(&questions, &answers);
        assert_eq!(outcome.correct_count, 1);
        assert_eq!(outcome.percentage, 33);
    }

    #[test]
    fn zero_questions_grade_to_zero() {
        let outcome = grade(&[], &HashMap::new());
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.percentage, 0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let questions = vec![
            question_with(1, AnswerOption::A),
            question_with(2, AnswerOption::A),
            question_with(3, AnswerOption::A),
        ];
        // 2/3 correct -> 66.66 -> 67.
        let answers = HashMap::from([(1, AnswerOption::A), (2, AnswerOption::A)]);
        assert_eq!(grade(&questions, &answers).percentage, 67);
    }

    async fn quiz_with_four_questions(db: &DbConn, pass_score: i32) -> quiz::Model {
        let instructor = UserModel::create(db, "quizmaster", "qm@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let course = CourseModel::create(db, instructor.id, "Testing", "", 0.0)
            .await
            .unwrap();
        let quiz = quiz::Model::create(db, course.id, "Final", pass_score).await.unwrap();
        for correct in [AnswerOption::A, AnswerOption::B, AnswerOption::C, AnswerOption::D] {
            question::Model::create(db, quiz.id, "q", "a", "b", "c", "d", correct)
                .await
                .unwrap();
        }
        quiz
    }

    #[tokio::test]
    async fn three_of_four_with_pass_score_70_passes() {
        let db = setup_test_db().await;
        let quiz = quiz_with_four_questions(&db, 70).await;
        let student = UserModel::create(&db, "tries", "tries@example.com", "password2", Role::Student)
            .await
            .unwrap();

        let questions = question::Model::for_quiz(&db, quiz.id).await.unwrap();
        let mut answers: HashMap<i64, AnswerOption> = questions
            .iter()
            .map(|q| (q.id, q.correct_option))
            .collect();
        // Break one answer.
        let wrong_id = questions[0].id;
        answers.insert(
            wrong_id,
            if questions[0].correct_option == AnswerOption::A {
                AnswerOption::B
            } else {
                AnswerOption::A
            },
        );

        let (attempt, outcome) = Model::submit(&db, student.id, &quiz, &answers).await.unwrap();
        assert_eq!(outcome.percentage, 75);
        assert_eq!(attempt.score, 75);
        assert!(attempt.passed);

        let history = Model::for_user_quiz(&db, student.id, quiz.id).await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn attempts_accumulate_without_mutating_history() {
        let db = setup_test_db().await;
        let quiz = quiz_with_four_questions(&db, 70).await;
        let student = UserModel::create(&db, "again", "again@example.com", "password2", Role::Student)
            .await
            .unwrap();

        let (first, _) = Model::submit(&db, student.id, &quiz, &HashMap::new()).await.unwrap();
        assert_eq!(first.score, 0);
        assert!(!first.passed);

        let questions = question::Model::for_quiz(&db, quiz.id).await.unwrap();
        let full: HashMap<i64, AnswerOption> =
            questions.iter().map(|q| (q.id, q.correct_option)).collect();
        let (second, _) = Model::submit(&db, student.id, &quiz, &full).await.unwrap();
        assert_eq!(second.score, 100);

        let history = Model::for_user_quiz(&db, student.id, quiz.id).await.unwrap();
        assert_eq!(history.len(), 2);
        // The failed first attempt is still on record, untouched.
        assert!(history.iter().any(|a| a.id == first.id && a.score == 0));
    }

    #[tokio::test]
    async fn zero_question_quiz_passes_only_at_pass_score_zero() {
        let db = setup_test_db().await;
        let instructor = UserModel::create(&db, "empty", "empty@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let course = CourseModel::create(&db, instructor.id, "Empty", "", 0.0).await.unwrap();
        let student = UserModel::create(&db, "s", "s@example.com", "password2", Role::Student)
            .await
            .unwrap();

        let strict = quiz::Model::create(&db, course.id, "Strict", 70).await.unwrap();
        let (attempt, _) = Model::submit(&db, student.id, &strict, &HashMap::new()).await.unwrap();
        assert_eq!(attempt.score, 0);
        assert!(!attempt.passed);

        let lenient = quiz::Model::create(&db, course.id, "Lenient", 0).await.unwrap();
        let (attempt, _) = Model::submit(&db, student.id, &lenient, &HashMap::new()).await.unwrap();
        assert_eq!(attempt.score, 0);
        assert!(attempt.passed);
    }
}
