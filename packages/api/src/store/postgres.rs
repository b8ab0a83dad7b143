//! PostgreSQL-backed RecordStore.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{RecordStore, StoreError};
use crate::models::{Recipe, RecipeFields, User};

/// RecordStore over the `users` and `recipes` tables.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        // The unique constraint on username makes this a single atomic step
        let user = sqlx::query_as(
            "INSERT INTO users (id, username, password_hash) VALUES ($1, $2, $3)
             ON CONFLICT (username) DO NOTHING
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn count_recipes(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn recipes(&self, offset: i64, limit: i64) -> Result<Vec<Recipe>, StoreError> {
        let recipes = sqlx::query_as(
            "SELECT * FROM recipes ORDER BY created_at, id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(recipes)
    }

    async fn all_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        let recipes = sqlx::query_as("SELECT * FROM recipes ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(recipes)
    }

    async fn find_recipe(&self, id: Uuid) -> Result<Option<Recipe>, StoreError> {
        let recipe = sqlx::query_as("SELECT * FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(recipe)
    }

    async fn insert_recipe(
        &self,
        username: &str,
        fields: &RecipeFields,
    ) -> Result<Recipe, StoreError> {
        let recipe = sqlx::query_as(
            "INSERT INTO recipes (id, username, recipe_name, description, ingredients,
                                  cooking_time, serving_size, calories, recipe_image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(&fields.recipe_name)
        .bind(&fields.description)
        .bind(&fields.ingredients)
        .bind(fields.cooking_time)
        .bind(fields.serving_size)
        .bind(fields.calories)
        .bind(&fields.recipe_image)
        .fetch_one(&self.pool)
        .await?;
        Ok(recipe)
    }

    async fn update_recipe(&self, id: Uuid, fields: &RecipeFields) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE recipes SET
                recipe_name = $2,
                description = $3,
                ingredients = $4,
                cooking_time = $5,
                serving_size = $6,
                calories = $7,
                recipe_image = $8,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.recipe_name)
        .bind(&fields.description)
        .bind(&fields.ingredients)
        .bind(fields.cooking_time)
        .bind(fields.serving_size)
        .bind(fields.calories)
        .bind(&fields.recipe_image)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_recipe(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
