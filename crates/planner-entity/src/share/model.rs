//! Share record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use planner_core::types::ShareId;

use super::kind::{ContentKind, ContentRef};
use super::permission::SharePermission;

/// A persisted share. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    /// Row identifier.
    pub id: ShareId,
    /// Public bearer token, unique across all shares.
    pub token: String,
    /// Kind of the referenced content.
    pub content_kind: ContentKind,
    /// Opaque id of the referenced content.
    pub content_id: String,
    /// Granted permission.
    pub permission: SharePermission,
    /// Instant after which the share stops resolving (`None` = never).
    pub expires_at: Option<DateTime<Utc>>,
    /// Addresses notified at creation time.
    pub notified_emails: Vec<String>,
    /// When the share was created.
    pub created_at: DateTime<Utc>,
}

impl ShareRecord {
    /// Build a record from creation data.
    pub fn from_new(data: NewShare, now: DateTime<Utc>) -> Self {
        Self {
            id: ShareId::new(),
            token: data.token,
            content_kind: data.content.kind,
            content_id: data.content.id,
            permission: data.permission,
            expires_at: data.expires_at,
            notified_emails: data.notified_emails,
            created_at: now,
        }
    }

    /// The referenced content.
    pub fn content_ref(&self) -> ContentRef {
        ContentRef::new(self.content_kind, self.content_id.clone())
    }

    /// Whether the share has lapsed at `now`. The expiry instant itself is
    /// still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }
}

/// Data required to persist a share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShare {
    /// Generated token.
    pub token: String,
    /// Referenced content.
    pub content: ContentRef,
    /// Granted permission.
    pub permission: SharePermission,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Normalized recipient list.
    pub notified_emails: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(expires_at: Option<DateTime<Utc>>) -> ShareRecord {
        ShareRecord::from_new(
            NewShare {
                token: "tok".to_string(),
                content: ContentRef::new(ContentKind::Note, "n1"),
                permission: SharePermission::Read,
                expires_at,
                notified_emails: Vec::new(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_never_expires_without_deadline() {
        let share = record(None);
        assert!(!share.is_expired_at(Utc::now() + Duration::days(10_000)));
    }

    #[test]
    fn test_expiry_is_strictly_after() {
        let deadline = Utc::now();
        let share = record(Some(deadline));
        assert!(!share.is_expired_at(deadline - Duration::seconds(1)));
        assert!(!share.is_expired_at(deadline));
        assert!(share.is_expired_at(deadline + Duration::milliseconds(1)));
    }

    #[test]
    fn test_content_ref_round_trips_fields() {
        let share = record(None);
        let content = share.content_ref();
        assert_eq!(content.kind, ContentKind::Note);
        assert_eq!(content.id, "n1");
    }
}
