//! In-memory note store.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use planner_core::result::AppResult;
use planner_core::types::NoteId;
use planner_entity::note::Note;

use crate::repositories::NoteRepository;

/// Note store held in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteRepository {
    rows: Arc<DashMap<NoteId, Note>>,
}

impl MemoryNoteRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_sorted(&self, keep: impl Fn(&Note) -> bool) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .rows
            .iter()
            .filter(|r| keep(r.value()))
            .map(|r| r.value().clone())
            .collect();
        notes.sort_by_key(|n| Reverse(n.updated_at));
        notes
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn find_all(&self) -> AppResult<Vec<Note>> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn find_by_tag(&self, tag: &str) -> AppResult<Vec<Note>> {
        Ok(self.collect_sorted(|n| n.has_tag(tag)))
    }

    async fn find_by_id(&self, id: NoteId) -> AppResult<Option<Note>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn create(&self, note: &Note) -> AppResult<Note> {
        self.rows.insert(note.id, note.clone());
        Ok(note.clone())
    }

    async fn update(&self, note: &Note) -> AppResult<Option<Note>> {
        Ok(self.rows.get_mut(&note.id).map(|mut row| {
            *row = note.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: NoteId) -> AppResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use planner_entity::note::CreateNote;

    #[tokio::test]
    async fn test_find_by_tag_sorted_newest_first() {
        let repo = MemoryNoteRepository::new();
        let base = Utc::now();
        for (i, tags) in [vec!["work"], vec!["home"], vec!["work", "home"]]
            .into_iter()
            .enumerate()
        {
            let note = Note::create(
                CreateNote {
                    title: format!("n{i}"),
                    content: "body".to_string(),
                    tags: tags.into_iter().map(String::from).collect(),
                    category: None,
                },
                base + Duration::seconds(i as i64),
            )
            .unwrap();
            repo.create(&note).await.unwrap();
        }

        let work = repo.find_by_tag("work").await.unwrap();
        let titles: Vec<&str> = work.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n2", "n0"]);
    }
}
