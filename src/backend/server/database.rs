/**
 * Database Connection Handle
 *
 * An explicitly owned, lazily initialized PostgreSQL pool. The first call
 * to `pool()` connects and runs migrations; later calls reuse that pool.
 * Concurrent first calls share a single connection attempt. A failed
 * attempt leaves the handle empty so the next request retries the connect.
 *
 * The handle is created once in `create_app`, shared through `AppState`,
 * and closed explicitly during graceful shutdown.
 */

use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;

use crate::backend::store::StoreError;

const MAX_CONNECTIONS: u32 = 5;

pub struct Database {
    url: Option<String>,
    pool: OnceCell<PgPool>,
}

impl Database {
    /// Create an unconnected handle
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            pool: OnceCell::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    /// Connect on first use, reuse afterwards
    pub async fn pool(&self) -> Result<&PgPool, StoreError> {
        let url = self.url.as_deref().ok_or_else(|| {
            StoreError::Unavailable("DATABASE_URL not set".to_string())
        })?;

        self.pool
            .get_or_try_init(|| connect(url))
            .await
    }

    /// Close the pool if it was ever opened
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            tracing::info!("Closing database connection pool");
            pool.close().await;
        }
    }
}

async fn connect(url: &str) -> Result<PgPool, StoreError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            StoreError::Unavailable(e.to_string())
        })?;

    tracing::info!("Database connection pool created successfully");

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            // The schema may already be in place from an earlier deploy.
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}
