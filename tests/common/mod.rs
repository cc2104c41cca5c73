use chatstore::configuration::{get_configuration, DatabaseSettings};
use chatstore::helpers::db_pools::SqlStore;
use chatstore::store::SqlUserTermsOfServiceStore;
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub struct TestStore {
    pub store: SqlUserTermsOfServiceStore,
    pub db_pool: PgPool,
}

/// A store backed by a fresh, migrated database; `None` when PostgreSQL is unreachable.
pub async fn spawn_store() -> Option<TestStore> {
    let configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(err) => {
            eprintln!("Skipping tests: failed to read configuration: {}", err);
            return None;
        }
    };

    let mut database = configuration.database.master.clone();
    database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let sql_store = SqlStore::new(connection_pool.clone(), vec![]);
    if let Err(err) = sql_store.migrate().await {
        eprintln!("Skipping tests: failed to migrate: {}", err);
        return None;
    }

    Some(TestStore {
        store: SqlUserTermsOfServiceStore::new(sql_store),
        db_pool: connection_pool,
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    PgPool::connect(&config.connection_string()).await
}

pub async fn count_rows(pool: &PgPool, user_id: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM UserTermsOfService WHERE UserId = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
