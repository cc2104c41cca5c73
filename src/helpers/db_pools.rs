//! Master/replica connection handle shared by the SQL stores.
//!
//! Writes always go to the master pool. Reads may be served by any
//! replica; replicas are picked round-robin and the master stands in
//! when none are configured.

use crate::configuration::{DatabaseConfig, DatabaseSettings};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub type PgPool = Pool<Postgres>;

#[derive(Clone, Debug)]
pub struct SqlStore {
    master: PgPool,
    replicas: Vec<PgPool>,
    rr_counter: Arc<AtomicUsize>,
}

impl SqlStore {
    pub fn new(master: PgPool, replicas: Vec<PgPool>) -> Self {
        Self {
            master,
            replicas,
            rr_counter: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Opens the master pool and every replica pool described by `config`.
    #[tracing::instrument(name = "Connect to database", skip(config))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        tracing::info!(
            db_host = %config.master.host,
            db_port = config.master.port,
            db_name = %config.master.database_name,
            replicas = config.replicas.len(),
            "Connecting to PostgreSQL"
        );

        let master = pool_options(config)
            .connect_with(connect_options(&config.master))
            .await?;

        let mut replicas = Vec::with_capacity(config.replicas.len());
        for replica in &config.replicas {
            let pool = pool_options(config)
                .connect_with(connect_options(replica))
                .await?;
            replicas.push(pool);
        }

        Ok(Self::new(master, replicas))
    }

    pub fn get_master(&self) -> &PgPool {
        &self.master
    }

    pub fn get_replica(&self) -> &PgPool {
        if self.replicas.is_empty() {
            return &self.master;
        }
        let idx = self.rr_counter.fetch_add(1, Ordering::Relaxed) % self.replicas.len();
        &self.replicas[idx]
    }

    /// Master first, then replicas in configuration order.
    pub fn all_conns(&self) -> Vec<&PgPool> {
        std::iter::once(&self.master)
            .chain(self.replicas.iter())
            .collect()
    }

    /// Runs `SELECT 1` on every pool; fails on the first pool that cannot answer.
    #[tracing::instrument(name = "Ping database connections", skip(self))]
    pub async fn ping(&self) -> Result<usize, sqlx::Error> {
        let conns = self.all_conns();
        for (idx, pool) in conns.iter().enumerate() {
            sqlx::query("SELECT 1")
                .execute(*pool)
                .await
                .map_err(|err| {
                    tracing::error!("Connection {} did not answer: {:?}", idx, err);
                    err
                })?;
        }
        Ok(conns.len())
    }

    #[tracing::instrument(name = "Run database migrations", skip(self))]
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.master).await
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
}

fn connect_options(settings: &DatabaseSettings) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.database_name)
        .ssl_mode(PgSslMode::Disable)
}
