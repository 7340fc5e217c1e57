//! Note CRUD service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_core::types::NoteId;
use planner_database::repositories::NoteRepository;
use planner_entity::note::{CreateNote, Note, UpdateNote};

/// Manages notes.
#[derive(Debug, Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    /// Lists all notes, most recently updated first.
    pub async fn list(&self) -> AppResult<Vec<Note>> {
        self.repo.find_all().await
    }

    /// Lists notes carrying `tag`.
    pub async fn list_by_tag(&self, tag: &str) -> AppResult<Vec<Note>> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(AppError::validation("tag is required"));
        }
        self.repo.find_by_tag(tag).await
    }

    /// Gets a single note.
    pub async fn get(&self, id: NoteId) -> AppResult<Note> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Creates a note.
    pub async fn create(&self, data: CreateNote) -> AppResult<Note> {
        let note = Note::create(data, Utc::now())?;
        let note = self.repo.create(&note).await?;
        info!(note_id = %note.id, tags = note.tags.len(), "Note created");
        Ok(note)
    }

    /// Applies a partial update and refreshes `updated_at`.
    pub async fn update(&self, id: NoteId, changes: UpdateNote) -> AppResult<Note> {
        let mut note = self.get(id).await?;
        note.apply(changes, Utc::now())?;
        self.repo
            .update(&note)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Deletes a note.
    pub async fn delete(&self, id: NoteId) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Note not found"));
        }
        info!(note_id = %id, "Note deleted");
        Ok(())
    }
}
