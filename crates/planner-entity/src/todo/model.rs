//! To-do entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use planner_core::AppResult;
use planner_core::types::TodoId;

use super::priority::TodoPriority;
use crate::form::{nullable, optional_instant, patch_instant};
use crate::require_text;

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier.
    pub id: TodoId,
    /// Short title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Whether the item is done.
    pub completed: bool,
    /// Priority level.
    pub priority: TodoPriority,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new to-do item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    /// Short title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority (defaults to `Medium`).
    pub priority: Option<TodoPriority>,
    /// Optional deadline; an empty form value means none.
    #[serde(default, deserialize_with = "optional_instant")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update of a to-do item. A missing key leaves the field
/// unchanged; `null` clears the optional ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    /// New title.
    pub title: Option<String>,
    /// New description, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    /// New completion state.
    pub completed: Option<bool>,
    /// New priority.
    pub priority: Option<TodoPriority>,
    /// New deadline, or `Some(None)` to clear it (`null` or `""`).
    #[serde(default, deserialize_with = "patch_instant")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl CreateTodo {
    /// Validate required fields.
    pub fn validate(&self) -> AppResult<()> {
        require_text("title", &self.title)
    }
}

impl Todo {
    /// Build a new record from creation data.
    pub fn create(data: CreateTodo, now: DateTime<Utc>) -> AppResult<Self> {
        data.validate()?;
        Ok(Self {
            id: TodoId::new(),
            title: data.title.trim().to_string(),
            description: data.description,
            completed: false,
            priority: data.priority.unwrap_or_default(),
            due_date: data.due_date,
            created_at: now,
        })
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, changes: UpdateTodo) -> AppResult<()> {
        if let Some(title) = changes.title {
            require_text("title", &title)?;
            self.title = title.trim().to_string();
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        Ok(())
    }
}
