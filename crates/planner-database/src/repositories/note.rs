//! Note persistence contract.

use async_trait::async_trait;

use planner_core::result::AppResult;
use planner_core::types::NoteId;
use planner_entity::note::Note;

/// Storage for notes.
#[async_trait]
pub trait NoteRepository: Send + Sync + std::fmt::Debug + 'static {
    /// All notes, most recently updated first.
    async fn find_all(&self) -> AppResult<Vec<Note>>;

    /// Notes carrying `tag`, most recently updated first.
    async fn find_by_tag(&self, tag: &str) -> AppResult<Vec<Note>>;

    /// A single note.
    async fn find_by_id(&self, id: NoteId) -> AppResult<Option<Note>>;

    /// Persist a new note.
    async fn create(&self, note: &Note) -> AppResult<Note>;

    /// Overwrite an existing note. Returns `None` if it does not exist.
    async fn update(&self, note: &Note) -> AppResult<Option<Note>>;

    /// Remove a note. Returns whether a row was deleted.
    async fn delete(&self, id: NoteId) -> AppResult<bool>;
}
