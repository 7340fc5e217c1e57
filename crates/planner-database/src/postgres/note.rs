//! PostgreSQL note repository.

use async_trait::async_trait;
use sqlx::PgPool;

use planner_core::result::AppResult;
use planner_core::types::NoteId;
use planner_entity::note::Note;

use super::map_db_error;
use crate::repositories::NoteRepository;

/// Note repository backed by the `notes` table.
#[derive(Debug, Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn find_all(&self) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes ORDER BY updated_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list notes"))
    }

    async fn find_by_tag(&self, tag: &str) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE $1 = ANY(tags) ORDER BY updated_at DESC",
        )
        .bind(tag)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to list notes by tag"))
    }

    async fn find_by_id(&self, id: NoteId) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find note"))
    }

    async fn create(&self, note: &Note) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, title, content, tags, category, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.tags)
        .bind(&note.category)
        .bind(note.created_at)
        .bind(note.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create note"))
    }

    async fn update(&self, note: &Note) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = $2, content = $3, tags = $4, category = $5, \
             updated_at = $6 WHERE id = $1 RETURNING *",
        )
        .bind(note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.tags)
        .bind(&note.category)
        .bind(note.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to update note"))
    }

    async fn delete(&self, id: NoteId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete note"))?;
        Ok(result.rows_affected() > 0)
    }
}
