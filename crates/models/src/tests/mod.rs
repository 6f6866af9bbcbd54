/// Database connection and migration tests
pub mod db_tests;


/// Transaction commit/rollback across orders and payments
pub mod transaction_tests;

use chrono::Utc;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, Set};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::record::Record;
use crate::{customer, db};

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect and make sure the schema is current.
/// `None` means the test should be skipped (SKIP_DB_TESTS set or no database reachable).
pub(crate) async fn test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let cfg = configs::AppConfig::load_or_env().map(|c| c.database).unwrap_or_default();
    let conn = match db::connect_with_config(&cfg).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(None);
        }
    };
    MIGRATED
        .get_or_try_init(|| async { db::migrate(&conn).await })
        .await?;
    Ok(Some(conn))
}

/// Build an active model for `R` the way the repository does: fresh id, both timestamps, input fields.
pub(crate) fn new_active<R: Record>(input: R::Input) -> R::ActiveModel {
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
    let mut am = <R::ActiveModel as ActiveModelBehavior>::new();
    am.set(R::ID, Uuid::new_v4().into());
    am.set(R::CREATED_AT, now.into());
    am.set(R::UPDATED_AT, now.into());
    R::apply(input, &mut am);
    am
}

pub(crate) async fn insert_customer(conn: &DatabaseConnection, first: &str, last: &str) -> anyhow::Result<customer::Model> {
    let input = customer::Input {
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}@example.com", Uuid::new_v4()),
        ..Default::default()
    };
    let mut am = new_active::<customer::Entity>(input);
    am.source = Set("test".into());
    Ok(am.insert(conn).await?)
}
