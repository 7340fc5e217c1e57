//! Calendar event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use planner_core::types::EventId;
use planner_core::{AppError, AppResult};

use crate::form::{nullable, optional_instant};
use crate::require_text;

/// Colour used when an event is created without one.
pub const DEFAULT_EVENT_COLOR: &str = "#3788d8";

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Start instant.
    pub start: DateTime<Utc>,
    /// End instant.
    pub end: DateTime<Utc>,
    /// Whether the event spans whole days.
    pub all_day: bool,
    /// Display colour.
    pub color: String,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create an event. `start` and `end` accept the
/// calendar form's formats and are required by [`Event::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_instant")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_instant")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: bool,
    pub color: Option<String>,
}

/// Partial update of an event. `description: null` clears it; a blank
/// `start` or `end` leaves that bound unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "optional_instant")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_instant")]
    pub end: Option<DateTime<Utc>>,
    pub all_day: Option<bool>,
    pub color: Option<String>,
}

fn check_range(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<()> {
    if end < start {
        return Err(AppError::validation("end must not be before start"));
    }
    Ok(())
}

impl Event {
    /// Build a new event from creation data.
    pub fn create(data: CreateEvent, now: DateTime<Utc>) -> AppResult<Self> {
        require_text("title", &data.title)?;
        let start = data
            .start
            .ok_or_else(|| AppError::validation("start is required"))?;
        let end = data
            .end
            .ok_or_else(|| AppError::validation("end is required"))?;
        check_range(start, end)?;
        Ok(Self {
            id: EventId::new(),
            title: data.title.trim().to_string(),
            description: data.description,
            start,
            end,
            all_day: data.all_day,
            color: data
                .color
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
            created_at: now,
        })
    }

    /// Apply a partial update. The resulting range is checked before any
    /// field is written.
    pub fn apply(&mut self, changes: UpdateEvent) -> AppResult<()> {
        if let Some(title) = &changes.title {
            require_text("title", title)?;
        }
        let start = changes.start.unwrap_or(self.start);
        let end = changes.end.unwrap_or(self.end);
        check_range(start, end)?;

        if let Some(title) = changes.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.start = start;
        self.end = end;
        if let Some(all_day) = changes.all_day {
            self.all_day = all_day;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
        Ok(())
    }
}
