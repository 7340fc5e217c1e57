//! PostgreSQL share repository.

use async_trait::async_trait;
use sqlx::PgPool;

use planner_core::result::AppResult;
use planner_entity::share::ShareRecord;

use super::map_db_error;
use crate::repositories::ShareRepository;

/// Share repository backed by the `shares` table.
///
/// The unique index on `token` makes duplicate inserts fail; they surface
/// as `Conflict`.
#[derive(Debug, Clone)]
pub struct PgShareRepository {
    pool: PgPool,
}

impl PgShareRepository {
    /// Create a new share repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    async fn insert(&self, share: &ShareRecord) -> AppResult<ShareRecord> {
        sqlx::query_as::<_, ShareRecord>(
            "INSERT INTO shares (id, token, content_kind, content_id, permission, expires_at, \
             notified_emails, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(share.id)
        .bind(&share.token)
        .bind(share.content_kind)
        .bind(&share.content_id)
        .bind(share.permission)
        .bind(share.expires_at)
        .bind(&share.notified_emails)
        .bind(share.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create share"))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareRecord>> {
        sqlx::query_as::<_, ShareRecord>("SELECT * FROM shares WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find share by token"))
    }
}
