use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// Open the store behind `database_url` and make sure the schema exists.
///
/// Accepts a plain file path, a `sqlite:` URL or the `:memory:` sentinel.
/// The pool holds exactly one connection that is never recycled, so every
/// request goes through the same handle and an in-memory store survives
/// for the lifetime of the pool.
pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("parse database url {database_url:?}"))?
        .create_if_missing(true);

    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("connect to database")?;

    init_schema(&db).await.context("initialize schema")?;
    tracing::debug!(database_url, "database ready");
    Ok(db)
}

/// Create the `users` table if it is not there yet.
pub async fn init_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) UNIQUE NOT NULL,
            role VARCHAR(255) NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(db)
    .await?;
    Ok(())
}
