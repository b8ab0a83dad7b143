//! # HTTP routes
//!
//! | Method/Path | Handler |
//! |-------------|---------|
//! | `GET /`, `GET /home` | [`pages::home`] |
//! | `GET /allrecipes?page=N` | [`pages::all_recipes`] |
//! | `GET,POST /login` | [`account::login_form`], [`account::login`] |
//! | `GET,POST /register` | [`account::register_form`], [`account::register`] |
//! | `GET,POST /profile/{username}` | [`pages::profile`] |
//! | `GET /logout` | [`account::logout`] |
//! | `GET,POST /addrecipe` | [`recipes::add_form`], [`recipes::add`] |
//! | `GET /recipe_view/{recipe_id}` | [`recipes::view`] |
//! | `GET,POST /edit_recipe/{recipe_id}` | [`recipes::edit_form`], [`recipes::edit`] |
//! | `GET,POST /delete_recipe/{recipe_id}` | [`recipes::delete_form`], [`recipes::delete`] |
//!
//! Every handler receives its context explicitly: the shared [`AppState`] through
//! `State`, and the caller's `Session` through the tower-sessions extractor. The
//! session layer itself is added by [`crate::auth::with_sessions`].

pub mod account;
pub mod pages;
pub mod recipes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::store::RecordStore;

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    /// Recipes per page on `/allrecipes`, at least 1.
    pub per_page: i64,
}

impl AppState {
    pub fn new(store: impl RecordStore + 'static, per_page: u32) -> Self {
        Self {
            store: Arc::new(store),
            per_page: i64::from(per_page.max(1)),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/home", get(pages::home))
        .route("/allrecipes", get(pages::all_recipes))
        .route("/login", get(account::login_form).post(account::login))
        .route(
            "/register",
            get(account::register_form).post(account::register),
        )
        .route("/profile/{username}", get(pages::profile).post(pages::profile))
        .route("/logout", get(account::logout))
        .route("/addrecipe", get(recipes::add_form).post(recipes::add))
        .route("/recipe_view/{recipe_id}", get(recipes::view))
        .route(
            "/edit_recipe/{recipe_id}",
            get(recipes::edit_form).post(recipes::edit),
        )
        .route(
            "/delete_recipe/{recipe_id}",
            get(recipes::delete_form).post(recipes::delete),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

pub(crate) fn profile_path(username: &str) -> String {
    format!("/profile/{username}")
}
