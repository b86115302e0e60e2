use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::user::{Model as User, Role};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let accounts = [
            ("admin", "admin@example.com", Role::Admin),
            ("thandi", "thandi@example.com", Role::Instructor),
            ("pieter", "pieter@example.com", Role::Instructor),
            ("nomsa", "nomsa@example.com", Role::Student),
            ("sipho", "sipho@example.com", Role::Student),
            ("lerato", "lerato@example.com", Role::Student),
            ("ayesha", "ayesha@example.com", Role::Student),
        ];

        for (username, email, role) in accounts {
            if User::get_by_username(db, username)
                .await
                .unwrap_or(None)
                .is_some()
            {
                continue;
            }
            User::create(db, username, email, "password123", role)
                .await
                .expect("Failed to seed user");
        }
    }
}
