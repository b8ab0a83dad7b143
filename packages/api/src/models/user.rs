//! # User model for registered accounts
//!
//! [`User`] is the complete row from the `users` table. It derives [`sqlx::FromRow`] so it can be
//! loaded directly from queries:
//!
//! - `id`: primary key (`UUID v4`).
//! - `username`: unique login name, also used as the owner tag on recipes.
//! - `password_hash`: Argon2id hash in PHC format, never the plaintext.
//! - `created_at`: audit timestamp.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh, not yet stored, user record.
    pub fn new(username: &str, password_hash: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        }
    }
}
