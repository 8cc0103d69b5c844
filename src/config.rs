use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub pg_host: String,
    pub pg_port: Option<u16>,
    pub pg_user: String,
    pub pg_password: String,
    pub pg_database: String,
    pub api_title: String,
    pub api_version: String,
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Connection components are not validated here. A missing or
        // malformed locator surfaces when the pool hands out its first
        // connection.
        let pg_host = env::var("PGHOST").unwrap_or_default();
        let pg_port = env::var("PGPORT").ok().and_then(|p| p.parse::<u16>().ok());
        let pg_user = env::var("PGUSER").unwrap_or_default();
        let pg_password = env::var("PGPASSWORD").unwrap_or_default();
        let pg_database = env::var("PGDATABASE").unwrap_or_default();

        let api_title = env::var("API_TITLE")
            .unwrap_or_else(|_| "Item Service".to_string());

        let api_version = env::var("API_VERSION")
            .unwrap_or_else(|_| "1.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            pg_host,
            pg_port,
            pg_user,
            pg_password,
            pg_database,
            api_title,
            api_version,
            service_host,
            service_port,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Postgres host: {}",
            if self.pg_host.is_empty() { "(unset)" } else { self.pg_host.as_str() });
        tracing::info!("  Postgres port: {}",
            self.pg_port.map_or_else(|| "(default)".to_string(), |p| p.to_string()));
        tracing::info!("  Postgres user: {}",
            if self.pg_user.is_empty() { "(unset)" } else { self.pg_user.as_str() });
        tracing::info!("  Postgres database: {}",
            if self.pg_database.is_empty() { "(unset)" } else { self.pg_database.as_str() });
        tracing::info!("  API title: {} ({})", self.api_title, self.api_version);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
