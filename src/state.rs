use sqlx::SqlitePool;

use crate::{config::AppConfig, db};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config.database_url).await?;
        Ok(Self::from_parts(db))
    }

    pub fn from_parts(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Fresh state backed by its own in-memory store.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let db = db::connect(":memory:").await.expect("in-memory store");
        Self::from_parts(db)
    }
}
