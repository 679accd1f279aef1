//! Database connection bootstrap: connect (with retry) and migrate.

use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, sanitize_db_url, DbKind};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 10;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
pub(crate) async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(attempt, max_attempts, interval_ms, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    match kind {
        // Every pooled connection to sqlite::memory: is a separate database.
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::Postgres => {
            opts.max_connections(10).min_connections(1);
        }
    }
    opts
}

/// Open a pool. Does NOT run migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    info!(url = %sanitize_db_url(&url), ?kind, "Connecting to database");

    retry_connection(
        || {
            let opts = connect_options(kind, url.clone());
            async move {
                Database::connect(opts)
                    .await
                    .map_err(|e| AppError::db_unavailable(format!("connect failed: {e}")))
            }
        },
        match kind {
            DbKind::Postgres => CONNECT_ATTEMPTS,
            DbKind::SqliteMemory => 1,
        },
        CONNECT_INTERVAL_MS,
    )
    .await
}

/// Single entrypoint used by the state builder: connect, then bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;
    Ok(conn)
}
