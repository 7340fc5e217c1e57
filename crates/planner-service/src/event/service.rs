//! Calendar event CRUD service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_core::types::EventId;
use planner_database::repositories::EventRepository;
use planner_entity::event::{CreateEvent, Event, UpdateEvent};

/// Manages calendar events.
#[derive(Debug, Clone)]
pub struct EventService {
    repo: Arc<dyn EventRepository>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    /// Lists all events by start time.
    pub async fn list(&self) -> AppResult<Vec<Event>> {
        let mut events = self.repo.find_all().await?;
        events.sort_by_key(|e| e.start);
        Ok(events)
    }

    /// Gets a single event.
    pub async fn get(&self, id: EventId) -> AppResult<Event> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Creates an event.
    pub async fn create(&self, data: CreateEvent) -> AppResult<Event> {
        let event = Event::create(data, Utc::now())?;
        let event = self.repo.create(&event).await?;
        info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    /// Applies a partial update.
    pub async fn update(&self, id: EventId, changes: UpdateEvent) -> AppResult<Event> {
        let mut event = self.get(id).await?;
        event.apply(changes)?;
        self.repo
            .update(&event)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Deletes an event.
    pub async fn delete(&self, id: EventId) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Event not found"));
        }
        info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
