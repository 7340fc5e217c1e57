//! Provider selection for all repositories.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use planner_core::config::DatabaseConfig;
use planner_core::error::{AppError, ErrorKind};
use planner_core::result::AppResult;

use crate::memory::{
    MemoryEventRepository, MemoryNoteRepository, MemoryShareRepository, MemoryTodoRepository,
};
use crate::postgres::pool as pg_pool;
use crate::postgres::{PgEventRepository, PgNoteRepository, PgShareRepository, PgTodoRepository};
use crate::repositories::{EventRepository, NoteRepository, ShareRepository, TodoRepository};

/// The set of repositories backing one running application.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct DataStore {
    /// To-do items.
    pub todos: Arc<dyn TodoRepository>,
    /// Calendar events.
    pub events: Arc<dyn EventRepository>,
    /// Notes.
    pub notes: Arc<dyn NoteRepository>,
    /// Share records.
    pub shares: Arc<dyn ShareRepository>,
    pool: Option<PgPool>,
}

impl DataStore {
    /// Build the store described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store");
                let store = Self::postgres(pg_pool::connect(config).await?);
                if config.auto_migrate {
                    store.migrate().await?;
                }
                Ok(store)
            }
            "memory" => {
                info!("Initializing in-memory store");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: memory, postgres"
            ))),
        }
    }

    /// A fresh, empty in-memory store.
    pub fn memory() -> Self {
        Self {
            todos: Arc::new(MemoryTodoRepository::new()),
            events: Arc::new(MemoryEventRepository::new()),
            notes: Arc::new(MemoryNoteRepository::new()),
            shares: Arc::new(MemoryShareRepository::new()),
            pool: None,
        }
    }

    /// A store backed by an existing PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            todos: Arc::new(PgTodoRepository::new(pool.clone())),
            events: Arc::new(PgEventRepository::new(pool.clone())),
            notes: Arc::new(PgNoteRepository::new(pool.clone())),
            shares: Arc::new(PgShareRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Check backend connectivity. The memory provider is always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        let Some(pool) = &self.pool else {
            return Ok(true);
        };
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Bring the PostgreSQL schema up to date. The memory provider has no
    /// schema, so asking it to migrate is a configuration error.
    pub async fn migrate(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => pg_pool::migrate(pool).await,
            None => Err(AppError::configuration(
                "Migrations need the postgres provider",
            )),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("PostgreSQL pool closed");
        }
    }
}
