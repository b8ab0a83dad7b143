use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use super::{RecordStore, StoreError};
use crate::models::{Recipe, RecipeFields, User};

/// In-memory RecordStore for testing and running without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Collections>>,
}

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<String, User>,
    // Kept in insertion order, like the creation-ordered SQL queries.
    recipes: Vec<Recipe>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored users with this username.
    pub fn user_count(&self, username: &str) -> usize {
        self.lock()
            .users
            .values()
            .filter(|u| u.username == username)
            .count()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock().users.get(username).cloned())
    }

    async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        let mut collections = self.lock();
        if collections.users.contains_key(username) {
            return Ok(None);
        }
        let user = User::new(username, password_hash);
        collections
            .users
            .insert(username.to_string(), user.clone());
        Ok(Some(user))
    }

    async fn count_recipes(&self) -> Result<i64, StoreError> {
        Ok(self.lock().recipes.len() as i64)
    }

    async fn recipes(&self, offset: i64, limit: i64) -> Result<Vec<Recipe>, StoreError> {
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .lock()
            .recipes
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn all_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.lock().recipes.clone())
    }

    async fn find_recipe(&self, id: Uuid) -> Result<Option<Recipe>, StoreError> {
        Ok(self.lock().recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_recipe(
        &self,
        username: &str,
        fields: &RecipeFields,
    ) -> Result<Recipe, StoreError> {
        let recipe = Recipe::new(username, fields);
        self.lock().recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, id: Uuid, fields: &RecipeFields) -> Result<bool, StoreError> {
        let mut collections = self.lock();
        match collections.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.apply(fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_recipe(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut collections = self.lock();
        let before = collections.recipes.len();
        collections.recipes.retain(|r| r.id != id);
        Ok(collections.recipes.len() != before)
    }
}
