//! # Form validation
//!
//! Each submitted form is deserialised with every field as plain text, so that a
//! malformed value becomes a field error on the re-rendered form rather than an
//! extractor rejection. `validate` either yields the checked data or a [`FormErrors`]
//! map keyed by field name.
//!
//! | Form | Rules |
//! |------|-------|
//! | [`LoginForm`] | username and password required |
//! | [`RegisterForm`] | username 5–15 characters of `[A-Za-z0-9_.-]`, password 7–12, confirmation equal |
//! | [`RecipeForm`] | every field required, the three counts must be non-zero whole numbers |
//! | [`DeleteForm`] | no rules |
//!
//! A value counts as present when it is non-empty after trimming. Accepted values are
//! kept exactly as submitted. Password fields are never echoed back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::RecipeFields;

const REQUIRED: &str = "This field is required.";
const NOT_A_NUMBER: &str = "Must be a whole number.";
const PASSWORDS_DIFFER: &str = "Passwords must be the same.";
const USERNAME_CHARSET: &str = "Only letters, digits, '_', '-' and '.' are allowed.";

/// Field name → messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<&'static str, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    fn required(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, REQUIRED);
            false
        } else {
            true
        }
    }

    fn length(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min || len > max {
            self.add(
                field,
                format!("Field must be between {min} and {max} characters long."),
            );
        }
    }

    fn integer(&mut self, field: &'static str, value: &str) -> i32 {
        if !self.required(field, value) {
            return 0;
        }
        match value.trim().parse() {
            // Zero counts as missing
            Ok(0) => {
                self.add(field, REQUIRED);
                0
            }
            Ok(n) => n,
            Err(_) => {
                self.add(field, NOT_A_NUMBER);
                0
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.required("username", &self.username);
        errors.required("password", &self.password);
        errors.finish(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default, skip_serializing)]
    pub password_confirm: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if errors.required("username", &self.username) {
            errors.length("username", &self.username, 5, 15);
            // The username ends up as a path segment of /profile/{username}
            if !self
                .username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            {
                errors.add("username", USERNAME_CHARSET);
            }
        }
        if errors.required("password", &self.password) {
            errors.length("password", &self.password, 7, 12);
        }
        if errors.required("password_confirm", &self.password_confirm)
            && self.password_confirm != self.password
        {
            errors.add("password_confirm", PASSWORDS_DIFFER);
        }

        errors.finish(())
    }
}

/// The add and edit recipe forms.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecipeForm {
    #[serde(default)]
    pub recipe_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub cooking_time: String,
    #[serde(default)]
    pub serving_size: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub recipe_image: String,
}

impl RecipeForm {
    pub fn validate(&self) -> Result<RecipeFields, FormErrors> {
        let mut errors = FormErrors::default();

        errors.required("recipe_name", &self.recipe_name);
        errors.required("description", &self.description);
        errors.required("ingredients", &self.ingredients);
        let cooking_time = errors.integer("cooking_time", &self.cooking_time);
        let serving_size = errors.integer("serving_size", &self.serving_size);
        let calories = errors.integer("calories", &self.calories);
        errors.required("recipe_image", &self.recipe_image);

        errors.finish(RecipeFields {
            recipe_name: self.recipe_name.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            cooking_time,
            serving_size,
            calories,
            recipe_image: self.recipe_image.clone(),
        })
    }
}

impl From<RecipeFields> for RecipeForm {
    fn from(fields: RecipeFields) -> Self {
        Self {
            recipe_name: fields.recipe_name,
            description: fields.description,
            ingredients: fields.ingredients,
            cooking_time: fields.cooking_time.to_string(),
            serving_size: fields.serving_size.to_string(),
            calories: fields.calories.to_string(),
            recipe_image: fields.recipe_image,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub username: Option<String>,
}
