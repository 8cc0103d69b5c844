use anyhow::{Context, Result};
use deadpool_postgres::{Config as PoolConfig, Object, Pool, Runtime};
use tokio_postgres::NoTls;

use crate::config::Config;

/// One request's handle on the store. Dropping it returns the connection
/// to the pool on every exit path, including validation and store errors.
pub type Session = Object;

/// Shareable database handle for use across async handlers
#[derive(Clone)]
pub struct Db {
    pool: Pool,
}

impl Db {
    /// Build the connection pool from the discrete connection components.
    ///
    /// No connection is opened here; a missing or malformed locator
    /// surfaces on the first `session()` checkout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut pool_config = PoolConfig::new();
        pool_config.host = non_empty(&config.pg_host);
        pool_config.port = config.pg_port;
        pool_config.user = non_empty(&config.pg_user);
        pool_config.password = non_empty(&config.pg_password);
        pool_config.dbname = non_empty(&config.pg_database);

        let pool = pool_config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .context("Failed to create Postgres connection pool")?;

        Ok(Self { pool })
    }

    /// Check out one pooled connection for the duration of a request.
    pub async fn session(&self) -> Result<Session> {
        self.pool
            .get()
            .await
            .context("Failed to check out a database connection")
    }

    /// Create the items table if it does not exist yet.
    ///
    /// Runs once at startup so a fresh database needs no manual setup.
    pub async fn ensure_schema(&self) -> Result<()> {
        let session = self.session().await?;

        session
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS items (
                    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
                    name TEXT NOT NULL,
                    description TEXT
                )",
            )
            .await
            .context("Failed to create items table")?;

        tracing::info!("Table 'items' is ready");
        Ok(())
    }

    /// Perform a health check by executing a simple query
    ///
    /// # Errors
    /// Returns an error if no connection can be checked out or the query fails
    pub async fn health_check(&self) -> Result<()> {
        let session = self.session().await?;

        session
            .query_one("SELECT 1", &[])
            .await
            .context("Failed to execute health check query")?;

        tracing::debug!("Health check query succeeded");
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
