use crate::db::{connect_with_config, migrate, test_connection, DATABASE_URL};
use crate::tests::test_db;
use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::Instant;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let start = Instant::now();
    let Some(db) = test_db().await? else { return Ok(()) };
    println!("Database connection established in {:?}", start.elapsed());

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Pool settings from `[database]` are accepted and the pool answers pings
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if test_db().await?.is_none() {
        return Ok(());
    }

    let config = DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 5,
        min_connections: 1,
        connect_timeout_secs: 10,
        ..Default::default()
    };
    let db = connect_with_config(&config).await?;
    test_connection(&db).await?;
    Ok(())
}

/// Running the migrator on an up-to-date schema is a no-op
#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    migrate(&db).await?;

    let stmt = Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT count(*)::int4 AS n FROM information_schema.tables WHERE table_name IN \
         ('customers','addresses','opportunities','leads','customer_segments','contacts','products',\
          'orders','order_items','payments','projects','tasks','notes','activities')"
            .to_string(),
    );
    let row = db.query_one(stmt).await?.expect("one row");
    let n: i32 = row.try_get("", "n")?;
    assert_eq!(n, 14);
    Ok(())
}
