//! # API crate: the recipe-sharing web service
//!
//! Users register, log in, and create, view, edit and delete recipes. Each route maps
//! a request onto one or two record store calls, guarded by a server-side session.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, session login state, flash messages, the `CurrentUser` extractor and the session layer |
//! | [`db`] | PostgreSQL pool construction and embedded migrations |
//! | [`error`] | `AppError` and its HTTP rendering |
//! | [`forms`] | Form payloads and their validation rules |
//! | [`models`] | `User` and `Recipe` records |
//! | [`routes`] | The axum router, `AppState` and the handlers |
//! | [`settings`] | Layered configuration (defaults, `config.toml`, environment) |
//! | [`store`] | The `RecordStore` trait with PostgreSQL and in-memory backends |
//! | [`views`] | JSON page responses |
//!
//! ## Wiring
//!
//! ```ignore
//! let state = api::AppState::new(api::store::PgStore::new(pool.clone()), settings.pagination.size);
//! let app = api::auth::with_sessions(api::router(state), session_store, &settings.session, key);
//! ```

pub mod auth;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;
pub mod routes;
pub mod settings;
pub mod store;
pub mod views;

pub use error::AppError;
pub use models::{Recipe, RecipeFields, User};
pub use routes::{router, AppState};
pub use settings::Settings;
