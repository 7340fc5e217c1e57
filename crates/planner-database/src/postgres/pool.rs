//! Pool construction for the PostgreSQL provider.

use std::str::FromStr;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

use planner_core::config::DatabaseConfig;
use planner_core::error::{AppError, ErrorKind};
use planner_core::result::AppResult;

/// Pool sizing and timeouts for `config`. An idle timeout of zero keeps
/// idle connections open indefinitely.
pub(crate) fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    let idle = (config.idle_timeout_seconds > 0)
        .then(|| Duration::from_secs(config.idle_timeout_seconds));
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(idle)
}

/// Parse `database.url`. Only host, port and database name are ever logged.
pub(crate) fn connect_options(config: &DatabaseConfig) -> AppResult<PgConnectOptions> {
    PgConnectOptions::from_str(&config.url).map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            "database.url is not a valid PostgreSQL URL",
            e,
        )
    })
}

/// Open the pool described by `config`.
pub(crate) async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    let options = connect_options(config)?;
    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or("<default>"),
        max_connections = config.max_connections,
        "Opening PostgreSQL pool"
    );

    pool_options(config)
        .connect_with(options)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "PostgreSQL is unreachable", e))
}

/// Apply the embedded schema migrations.
pub(crate) async fn migrate(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Schema migration failed", e))?;
    info!("Schema is up to date");
    Ok(())
}
