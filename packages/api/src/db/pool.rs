//! Database connection pool and schema migrations.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::settings::Database;
use crate::store::StoreError;

/// Open a connection pool from the database settings.
pub async fn connect(settings: &Database) -> Result<PgPool, StoreError> {
    let mut options = PgConnectOptions::from_str(&settings.uri)?;
    if let Some(name) = &settings.name {
        options = options.database(name);
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the `users` and `recipes` tables if they don't exist.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
