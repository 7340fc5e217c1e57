//! Closed set of shareable content kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use planner_core::AppError;

/// Kind of content a share points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "content_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A to-do item.
    Todo,
    /// A calendar event.
    Event,
    /// A note.
    Note,
}

impl ContentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ContentKind; 3] = [Self::Todo, Self::Event, Self::Note];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Event => "event",
            Self::Note => "note",
        }
    }

    /// Human-readable name used in notification text.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Event => "Calendar Event",
            Self::Note => "Note",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "event" => Ok(Self::Event),
            "note" => Ok(Self::Note),
            _ => Err(AppError::validation(format!("Invalid content kind: {s}"))),
        }
    }
}

/// Non-owning reference to a content record.
///
/// `id` is kept verbatim; only the fetcher for `kind` interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRef {
    /// Which store the id belongs to.
    pub kind: ContentKind,
    /// Opaque record identifier.
    pub id: String,
}

impl ContentRef {
    /// Create a reference.
    pub fn new(kind: ContentKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}
