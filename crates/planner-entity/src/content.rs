//! The payload returned when a share resolves.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::note::Note;
use crate::share::ContentKind;
use crate::todo::Todo;

/// A content record of any shareable kind.
///
/// Serializes as the bare record; the kind travels separately on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SharedContent {
    Todo(Todo),
    Event(Event),
    Note(Note),
}

impl SharedContent {
    /// Kind of the wrapped record.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Todo(_) => ContentKind::Todo,
            Self::Event(_) => ContentKind::Event,
            Self::Note(_) => ContentKind::Note,
        }
    }
}

impl From<Todo> for SharedContent {
    fn from(todo: Todo) -> Self {
        Self::Todo(todo)
    }
}

impl From<Event> for SharedContent {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

impl From<Note> for SharedContent {
    fn from(note: Note) -> Self {
        Self::Note(note)
    }
}
