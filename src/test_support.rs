use std::env;
use std::sync::Arc;

use crate::config::Config;
use crate::db::Db;
use crate::state::AppState;

/// Config pointing at the local test server, with the given database name.
/// Connection components come from the usual PG* variables when set.
pub fn test_config(database: &str) -> Config {
    Config {
        pg_host: env::var("PGHOST").unwrap_or_else(|_| "localhost".to_string()),
        pg_port: env::var("PGPORT").ok().and_then(|p| p.parse().ok()),
        pg_user: env::var("PGUSER").unwrap_or_else(|_| "postgres".to_string()),
        pg_password: env::var("PGPASSWORD").unwrap_or_else(|_| "postgres".to_string()),
        pg_database: database.to_string(),
        api_title: "Item Service".to_string(),
        api_version: "1.0.0".to_string(),
        service_host: "0.0.0.0".to_string(),
        service_port: 8000,
    }
}

/// Application state whose pool has never connected. Good enough for
/// endpoints and rejections that must not touch the store.
pub fn test_state(database: &str) -> AppState {
    let config = test_config(database);
    let db = Db::from_config(&config).expect("pool creation needs no server");
    AppState {
        db,
        config: Arc::new(config),
    }
}

/// Connect to the named test database, provisioning it empty.
///
/// Each test suite uses its own database name so suites stay isolated.
/// Returns `None` when no Postgres server is reachable, so callers can
/// print a skip notice and return.
pub async fn test_db(database: &str) -> Option<Db> {
    let maintenance = env::var("PGDATABASE").unwrap_or_else(|_| "postgres".to_string());
    let admin = Db::from_config(&test_config(&maintenance)).ok()?;
    let session = match admin.session().await {
        Ok(session) => session,
        Err(_) => return None,
    };

    // CREATE DATABASE cannot be parameterized; the name is a test constant.
    // The statement fails harmlessly when the database already exists.
    let _ = session
        .execute(format!("CREATE DATABASE {}", database).as_str(), &[])
        .await;

    let db = Db::from_config(&test_config(database)).ok()?;
    db.ensure_schema().await.ok()?;

    let session = db.session().await.ok()?;
    session
        .execute("TRUNCATE items RESTART IDENTITY", &[])
        .await
        .ok()?;

    Some(db)
}

/// State wired to the named test database, or `None` to skip.
pub async fn test_app_state(database: &str) -> Option<AppState> {
    let db = test_db(database).await?;
    Some(AppState {
        db,
        config: Arc::new(test_config(database)),
    })
}
