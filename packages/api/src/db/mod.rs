//! # Database module: PostgreSQL connection pool management
//!
//! The binary calls [`connect`] once at startup with the `database` settings and hands
//! the pool to [`crate::store::PgStore`] and to the session store. The pool is passed
//! along explicitly, never kept in a global.
//!
//! ## Re-exports
//!
//! - [`connect`]: opens a pool with `database.connections` connections. When
//!   `database.name` is set it replaces the database named in `database.uri`.
//! - [`migrate`]: runs the embedded migrations in `migrations/`.

mod pool;

pub use pool::{connect, migrate};
