//! # Page responses
//!
//! Handlers answer with a [`Page`]: the name of the view, the flash messages taken
//! from the session for this render, and the view's data. Pages serialise to JSON:
//!
//! ```json
//! { "view": "profile", "flashes": [{ "level": "primary", "message": "Recipe added." }],
//!   "data": { "username": "alice12", "recipes": [] } }
//! ```

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::Flash;
use crate::forms::{FormErrors, RecipeForm};
use crate::models::Recipe;

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub view: &'static str,
    pub flashes: Vec<Flash>,
    pub data: T,
}

impl<T: Serialize> Page<T> {
    pub fn new(view: &'static str, flashes: Vec<Flash>, data: T) -> Self {
        Self {
            view,
            flashes,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A single line of text, used by the home and error pages.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[derive(Debug, Serialize)]
pub struct Home {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub username: String,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    pub recipe: Recipe,
}

/// A form to fill in, echoing the submitted values and any field errors.
#[derive(Debug, Serialize)]
pub struct FormView<F> {
    pub form: F,
    pub errors: FormErrors,
}

impl<F: Serialize> FormView<F> {
    pub fn blank(form: F) -> Self {
        Self {
            form,
            errors: FormErrors::default(),
        }
    }
}

/// The edit form, pre-filled with the stored recipe on first display.
#[derive(Debug, Serialize)]
pub struct EditRecipe {
    pub recipe_id: Uuid,
    pub form: RecipeForm,
    pub errors: FormErrors,
}
