//! In-memory calendar event store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use planner_core::result::AppResult;
use planner_core::types::EventId;
use planner_entity::event::Event;

use crate::repositories::EventRepository;

/// Event store held in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventRepository {
    rows: Arc<DashMap<EventId, Event>>,
}

impl MemoryEventRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        let mut events: Vec<Event> = self.rows.iter().map(|r| r.value().clone()).collect();
        events.sort_by_key(|e| e.start);
        Ok(events)
    }

    async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn create(&self, event: &Event) -> AppResult<Event> {
        self.rows.insert(event.id, event.clone());
        Ok(event.clone())
    }

    async fn update(&self, event: &Event) -> AppResult<Option<Event>> {
        Ok(self.rows.get_mut(&event.id).map(|mut row| {
            *row = event.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: EventId) -> AppResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }
}
