//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use planner_core::AppResult;
use planner_core::types::NoteId;

use crate::require_text;

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier.
    pub id: NoteId,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Tags, unique, in insertion order.
    pub tags: Vec<String>,
    /// Category label.
    pub category: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last changed.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
}

/// Partial update of a note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
}

/// Trim tags, drop blanks and duplicates, keep first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

fn category_or_default(category: Option<String>) -> String {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

impl Note {
    /// Build a new note from creation data.
    pub fn create(data: CreateNote, now: DateTime<Utc>) -> AppResult<Self> {
        require_text("title", &data.title)?;
        require_text("content", &data.content)?;
        Ok(Self {
            id: NoteId::new(),
            title: data.title.trim().to_string(),
            content: data.content,
            tags: normalize_tags(data.tags),
            category: category_or_default(data.category),
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update and bump `updated_at`.
    pub fn apply(&mut self, changes: UpdateNote, now: DateTime<Utc>) -> AppResult<()> {
        if let Some(title) = &changes.title {
            require_text("title", title)?;
        }
        if let Some(content) = &changes.content {
            require_text("content", content)?;
        }

        if let Some(title) = changes.title {
            self.title = title.trim().to_string();
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(tags) = changes.tags {
            self.tags = normalize_tags(tags);
        }
        if changes.category.is_some() {
            self.category = category_or_default(changes.category);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Whether the note carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
