use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// User's unique email address.
    pub email: String,
    /// Securely hashed password string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The user's platform-wide role.
    pub role: Role,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Closed set of platform roles, stored as a text enum in the database.
///
/// Elevated privileges beyond `Admin` come from the configured superuser ID
/// set, not from an extra role variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "student")]
    Student,

    #[sea_orm(string_value = "instructor")]
    Instructor,

    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Courses this user teaches.
    #[sea_orm(has_many = "super::course::Entity")]
    Course,

    /// Course enrollments held by this user.
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a new user with an argon2-hashed password.
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection.
    /// * `username` - Unique login name.
    /// * `email` - Unique email address.
    /// * `password` - Plaintext password, hashed before storage.
    /// * `role` - Platform role assigned to the user.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` if hashing or the insert fails (including unique
    /// constraint violations on `username`/`email`).
    pub async fn create(
        db: &DbConn,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))?
            .to_string();

        let now = Utc::now();
        let user = ActiveModel {
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(password_hash),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    /// Verifies a plaintext password against the stored argon2 hash.
    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_by_username(db: &DbConn, username: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    pub async fn get_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::Email.eq(email)).one(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use std::str::FromStr;

    #[tokio::test]
    async fn password_hash_round_trip() {
        let db = setup_test_db().await;

        let user = Model::create(&db, "nomsa", "nomsa@example.com", "hunter2hunter2", Role::Student)
            .await
            .unwrap();

        assert_ne!(user.password_hash, "hunter2hunter2");
        assert!(user.verify_password("hunter2hunter2"));
        assert!(!user.verify_password("wrong-password"));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let db = setup_test_db().await;

        Model::create(&db, "pieter", "pieter@example.com", "password1", Role::Instructor)
            .await
            .unwrap();
        let dup = Model::create(&db, "pieter", "other@example.com", "password2", Role::Student).await;

        assert!(dup.is_err());
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::from_str("Instructor").unwrap(), Role::Instructor);
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert!(Role::from_str("lecturer").is_err());
    }
}
