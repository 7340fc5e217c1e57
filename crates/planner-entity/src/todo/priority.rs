//! To-do priority levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use planner_core::AppError;

/// Priority of a to-do item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "todo_priority", rename_all = "lowercase")]
pub enum TodoPriority {
    /// Urgent.
    #[serde(alias = "high")]
    High,
    /// Normal.
    #[default]
    #[serde(alias = "medium")]
    Medium,
    /// Whenever.
    #[serde(alias = "low")]
    Low,
}

impl TodoPriority {
    /// Sort rank, most urgent first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for TodoPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(AppError::validation(format!("Invalid priority: {s}"))),
        }
    }
}
