//! Listing filters and sort orders for to-do items.

use std::cmp::Ordering;
use std::str::FromStr;

use planner_core::error::AppError;
use planner_entity::todo::{Todo, TodoPriority};

/// Sort order for to-do listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoSort {
    /// Newest first.
    #[default]
    CreatedAt,
    /// Earliest deadline first; items without a deadline last.
    DueDate,
    /// High, then Medium, then Low.
    Priority,
}

impl FromStr for TodoSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "createdat" | "created_at" => Ok(Self::CreatedAt),
            "duedate" | "due_date" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            _ => Err(AppError::validation(format!("Invalid sortBy: {s}"))),
        }
    }
}

/// Filter and ordering applied to a to-do listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoQuery {
    /// Keep only items with this priority.
    pub priority: Option<TodoPriority>,
    /// Ordering of the result.
    pub sort_by: TodoSort,
}

impl TodoQuery {
    /// Filter and sort `todos` in place. Sorting is stable, so ties keep
    /// the store's creation order.
    pub fn apply(&self, todos: &mut Vec<Todo>) {
        if let Some(priority) = self.priority {
            todos.retain(|t| t.priority == priority);
        }
        match self.sort_by {
            TodoSort::CreatedAt => todos.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            TodoSort::DueDate => todos.sort_by(|a, b| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }),
            TodoSort::Priority => todos.sort_by_key(|t| t.priority.rank()),
        }
    }
}
