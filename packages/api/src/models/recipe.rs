//! Recipe records and the editable field set shared by the add and edit forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full recipe record from the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    /// Owner of the recipe.
    pub username: String,
    pub recipe_name: String,
    pub description: String,
    pub ingredients: String,
    pub cooking_time: i32,
    pub serving_size: i32,
    pub calories: i32,
    pub recipe_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The fields a user submits when adding or editing a recipe.
///
/// Editing overwrites every one of these on the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeFields {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: String,
    pub cooking_time: i32,
    pub serving_size: i32,
    pub calories: i32,
    pub recipe_image: String,
}

impl Recipe {
    /// Build a fresh, not yet stored, recipe owned by `username`.
    pub fn new(username: &str, fields: &RecipeFields) -> Self {
        let now = Utc::now();
        let mut recipe = Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            recipe_name: String::new(),
            description: String::new(),
            ingredients: String::new(),
            cooking_time: 0,
            serving_size: 0,
            calories: 0,
            recipe_image: String::new(),
            created_at: now,
            updated_at: now,
        };
        recipe.apply(fields);
        recipe
    }

    /// Overwrite all editable fields.
    pub fn apply(&mut self, fields: &RecipeFields) {
        self.recipe_name = fields.recipe_name.clone();
        self.description = fields.description.clone();
        self.ingredients = fields.ingredients.clone();
        self.cooking_time = fields.cooking_time;
        self.serving_size = fields.serving_size;
        self.calories = fields.calories;
        self.recipe_image = fields.recipe_image.clone();
        self.updated_at = Utc::now();
    }

    /// The editable part of the record, used to pre-fill the edit form.
    pub fn fields(&self) -> RecipeFields {
        RecipeFields {
            recipe_name: self.recipe_name.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            cooking_time: self.cooking_time,
            serving_size: self.serving_size,
            calories: self.calories,
            recipe_image: self.recipe_image.clone(),
        }
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.username == username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> RecipeFields {
        RecipeFields {
            recipe_name: "Pancakes".to_string(),
            description: "Fluffy".to_string(),
            ingredients: "Flour, milk, eggs".to_string(),
            cooking_time: 20,
            serving_size: 4,
            calories: 350,
            recipe_image: "https://img.example/pancakes.png".to_string(),
        }
    }

    #[test]
    fn test_new_recipe_keeps_fields() {
        let recipe = Recipe::new("alice12", &pancakes());
        assert_eq!(recipe.username, "alice12");
        assert_eq!(recipe.fields(), pancakes());
        assert!(recipe.is_owned_by("alice12"));
        assert!(!recipe.is_owned_by("bob"));
    }

    #[test]
    fn test_apply_overwrites_everything_but_owner() {
        let mut recipe = Recipe::new("alice12", &pancakes());
        let id = recipe.id;
        let waffles = RecipeFields {
            recipe_name: "Waffles".to_string(),
            description: "Crispy".to_string(),
            ingredients: "Flour, butter".to_string(),
            cooking_time: 15,
            serving_size: 2,
            calories: 410,
            recipe_image: "https://img.example/waffles.png".to_string(),
        };
        recipe.apply(&waffles);
        assert_eq!(recipe.fields(), waffles);
        assert_eq!(recipe.id, id);
        assert_eq!(recipe.username, "alice12");
    }
}
