//! Calendar event persistence contract.

use async_trait::async_trait;

use planner_core::result::AppResult;
use planner_core::types::EventId;
use planner_entity::event::Event;

/// Storage for calendar events.
#[async_trait]
pub trait EventRepository: Send + Sync + std::fmt::Debug + 'static {
    /// All events ordered by start.
    async fn find_all(&self) -> AppResult<Vec<Event>>;

    /// A single event.
    async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>>;

    /// Persist a new event.
    async fn create(&self, event: &Event) -> AppResult<Event>;

    /// Overwrite an existing event. Returns `None` if it does not exist.
    async fn update(&self, event: &Event) -> AppResult<Option<Event>>;

    /// Remove an event. Returns whether a row was deleted.
    async fn delete(&self, id: EventId) -> AppResult<bool>;
}
