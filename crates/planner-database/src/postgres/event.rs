//! PostgreSQL calendar event repository.

use async_trait::async_trait;
use sqlx::PgPool;

use planner_core::result::AppResult;
use planner_core::types::EventId;
use planner_entity::event::Event;

use super::map_db_error;
use crate::repositories::EventRepository;

/// Event repository backed by the `events` table.
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY start ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list events"))
    }

    async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find event"))
    }

    async fn create(&self, event: &Event) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, title, description, start, \"end\", all_day, color, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.start)
        .bind(event.end)
        .bind(event.all_day)
        .bind(&event.color)
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create event"))
    }

    async fn update(&self, event: &Event) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET title = $2, description = $3, start = $4, \"end\" = $5, \
             all_day = $6, color = $7 WHERE id = $1 RETURNING *",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.start)
        .bind(event.end)
        .bind(event.all_day)
        .bind(&event.color)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to update event"))
    }

    async fn delete(&self, id: EventId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete event"))?;
        Ok(result.rows_affected() > 0)
    }
}
