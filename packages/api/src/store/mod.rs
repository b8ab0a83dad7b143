//! # Record store: persistence for users and recipes
//!
//! Every route handler reaches the data through the [`RecordStore`] trait, so the same
//! handlers run against PostgreSQL in production ([`PgStore`]) and against an in-memory
//! store in tests ([`MemoryStore`]).
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`find_user`](RecordStore::find_user) | Look up a user by username. |
//! | [`insert_user`](RecordStore::insert_user) | Atomic insert-if-absent. `None` means the username is taken. |
//! | [`count_recipes`](RecordStore::count_recipes) | Size of the whole recipe collection. |
//! | [`recipes`](RecordStore::recipes) | A window of recipes in creation order. |
//! | [`all_recipes`](RecordStore::all_recipes) | Every recipe in creation order. |
//! | [`find_recipe`](RecordStore::find_recipe) | Look up a recipe by id. |
//! | [`insert_recipe`](RecordStore::insert_recipe) | Store a new recipe for an owner. |
//! | [`update_recipe`](RecordStore::update_recipe) | Overwrite the editable fields. `false` when nothing matched. |
//! | [`delete_recipe`](RecordStore::delete_recipe) | Remove a recipe. `false` when nothing matched. |
//!
//! Writes are visible to the next read; there is no caching layer and no transaction
//! spanning more than one call.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Recipe, RecipeFields, User};

/// Errors raised by a [`RecordStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert a user unless the username already exists.
    async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError>;

    async fn count_recipes(&self) -> Result<i64, StoreError>;

    async fn recipes(&self, offset: i64, limit: i64) -> Result<Vec<Recipe>, StoreError>;

    async fn all_recipes(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn find_recipe(&self, id: Uuid) -> Result<Option<Recipe>, StoreError>;

    async fn insert_recipe(
        &self,
        username: &str,
        fields: &RecipeFields,
    ) -> Result<Recipe, StoreError>;

    async fn update_recipe(&self, id: Uuid, fields: &RecipeFields) -> Result<bool, StoreError>;

    async fn delete_recipe(&self, id: Uuid) -> Result<bool, StoreError>;
}
