//! Data models for the application.

mod recipe;
mod user;

pub use recipe::{Recipe, RecipeFields};
pub use user::User;
