//! Kind-directed content fetch.
//!
//! Each [`ContentKind`] is served by exactly one [`ContentFetcher`]. Adding a
//! kind means adding a fetcher and registering it in
//! [`ContentResolver::from_store`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_core::types::{EventId, NoteId, TodoId};
use planner_database::DataStore;
use planner_database::repositories::{EventRepository, NoteRepository, TodoRepository};
use planner_entity::SharedContent;
use planner_entity::share::{ContentKind, ContentRef};

/// Single-record fetch for one content kind.
#[async_trait]
pub trait ContentFetcher: Send + Sync + std::fmt::Debug + 'static {
    /// The kind this fetcher serves.
    fn kind(&self) -> ContentKind;

    /// Fetch a record by its opaque id. `Ok(None)` when the id names no
    /// record, including ids this kind cannot parse.
    async fn fetch(&self, id: &str) -> AppResult<Option<SharedContent>>;
}

/// Fetches to-do items.
#[derive(Debug, Clone)]
pub struct TodoFetcher {
    repo: Arc<dyn TodoRepository>,
}

impl TodoFetcher {
    /// Create a fetcher over `repo`.
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContentFetcher for TodoFetcher {
    fn kind(&self) -> ContentKind {
        ContentKind::Todo
    }

    async fn fetch(&self, id: &str) -> AppResult<Option<SharedContent>> {
        let Ok(id) = id.parse::<TodoId>() else {
            return Ok(None);
        };
        Ok(self.repo.find_by_id(id).await?.map(SharedContent::from))
    }
}

/// Fetches calendar events.
#[derive(Debug, Clone)]
pub struct EventFetcher {
    repo: Arc<dyn EventRepository>,
}

impl EventFetcher {
    /// Create a fetcher over `repo`.
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContentFetcher for EventFetcher {
    fn kind(&self) -> ContentKind {
        ContentKind::Event
    }

    async fn fetch(&self, id: &str) -> AppResult<Option<SharedContent>> {
        let Ok(id) = id.parse::<EventId>() else {
            return Ok(None);
        };
        Ok(self.repo.find_by_id(id).await?.map(SharedContent::from))
    }
}

/// Fetches notes.
#[derive(Debug, Clone)]
pub struct NoteFetcher {
    repo: Arc<dyn NoteRepository>,
}

impl NoteFetcher {
    /// Create a fetcher over `repo`.
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContentFetcher for NoteFetcher {
    fn kind(&self) -> ContentKind {
        ContentKind::Note
    }

    async fn fetch(&self, id: &str) -> AppResult<Option<SharedContent>> {
        let Ok(id) = id.parse::<NoteId>() else {
            return Ok(None);
        };
        Ok(self.repo.find_by_id(id).await?.map(SharedContent::from))
    }
}

/// Dispatch table from content kind to fetcher.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    fetchers: HashMap<ContentKind, Arc<dyn ContentFetcher>>,
}

impl ContentResolver {
    /// Build a resolver from a set of fetchers.
    ///
    /// Fails if any kind in [`ContentKind::ALL`] has no fetcher or if a kind
    /// is registered twice.
    pub fn new(fetchers: Vec<Arc<dyn ContentFetcher>>) -> AppResult<Self> {
        let mut table: HashMap<ContentKind, Arc<dyn ContentFetcher>> = HashMap::new();
        for fetcher in fetchers {
            let kind = fetcher.kind();
            if table.insert(kind, fetcher).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate content fetcher for kind '{kind}'"
                )));
            }
        }

        if let Some(missing) = ContentKind::ALL.iter().find(|k| !table.contains_key(*k)) {
            return Err(AppError::configuration(format!(
                "No content fetcher registered for kind '{missing}'"
            )));
        }

        Ok(Self { fetchers: table })
    }

    /// Register the fetchers for every kind held in `store`.
    pub fn from_store(store: &DataStore) -> AppResult<Self> {
        Self::new(vec![
            Arc::new(TodoFetcher::new(store.todos.clone())),
            Arc::new(EventFetcher::new(store.events.clone())),
            Arc::new(NoteFetcher::new(store.notes.clone())),
        ])
    }

    /// Fetch the referenced record.
    pub async fn fetch(&self, content: &ContentRef) -> AppResult<Option<SharedContent>> {
        let fetcher = self.fetchers.get(&content.kind).ok_or_else(|| {
            AppError::internal(format!("No content fetcher for kind '{}'", content.kind))
        })?;
        fetcher.fetch(&content.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use planner_core::error::ErrorKind;
    use planner_entity::note::{CreateNote, Note};

    #[test]
    fn test_missing_kind_is_configuration_error() {
        let store = DataStore::memory();
        let err = ContentResolver::new(vec![
            Arc::new(TodoFetcher::new(store.todos.clone())),
            Arc::new(NoteFetcher::new(store.notes.clone())),
        ])
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("event"));
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let store = DataStore::memory();
        let result = ContentResolver::new(vec![
            Arc::new(TodoFetcher::new(store.todos.clone())),
            Arc::new(TodoFetcher::new(store.todos.clone())),
            Arc::new(EventFetcher::new(store.events.clone())),
            Arc::new(NoteFetcher::new(store.notes.clone())),
        ]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_dispatches_by_kind() {
        let store = DataStore::memory();
        let note = Note::create(
            CreateNote {
                title: "t".to_string(),
                content: "c".to_string(),
                ..CreateNote::default()
            },
            Utc::now(),
        )
        .unwrap();
        store.notes.create(&note).await.unwrap();
        let resolver = ContentResolver::from_store(&store).unwrap();

        let found = resolver
            .fetch(&ContentRef::new(ContentKind::Note, note.id.to_string()))
            .await
            .unwrap();
        assert_eq!(found, Some(SharedContent::Note(note.clone())));

        // Same id under another kind names nothing.
        let other = resolver
            .fetch(&ContentRef::new(ContentKind::Todo, note.id.to_string()))
            .await
            .unwrap();
        assert!(other.is_none());
    }

    #[tokio::test]
    async fn test_unparseable_id_is_absent() {
        let resolver = ContentResolver::from_store(&DataStore::memory()).unwrap();
        let found = resolver
            .fetch(&ContentRef::new(ContentKind::Event, "not-a-uuid"))
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
