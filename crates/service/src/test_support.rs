#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use models::db::{connect_with_config, migrate};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> configs::DatabaseConfig {
    let mut cfg = configs::AppConfig::load_or_env().map(|c| c.database).unwrap_or_default();
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = 1;
    cfg.connect_timeout_secs = 5;
    cfg.acquire_timeout_secs = 10;
    cfg
}

/// A fresh connection for the current test's runtime, or `None` when the
/// database tests should be skipped (`SKIP_DB_TESTS` set, or nothing listening).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let db = match connect_with_config(&test_config()).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(None);
        }
    };
    MIGRATED.get_or_try_init(|| async { migrate(&db).await }).await?;
    Ok(Some(db))
}
