//! Request DTOs with validation.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use validator::Validate;

use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_entity::share::{ContentKind, ContentRef, SharePermission};
use planner_entity::todo::TodoPriority;
use planner_service::share::CreateShareRequest;
use planner_service::todo::{TodoQuery, TodoSort};

/// Body of `POST /api/shares`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareBody {
    /// `todo`, `event` or `note` (any case). Older clients send `type`.
    #[serde(alias = "type")]
    pub content_kind: String,
    /// Opaque id of the shared record.
    #[validate(length(min = 1, message = "contentId is required"))]
    pub content_id: String,
    /// `read` (default) or `edit`.
    pub permission: Option<String>,
    /// Absolute expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Relative expiry in hours from now.
    #[validate(range(min = 1, message = "expiresInHours must be positive"))]
    pub expires_in_hours: Option<i64>,
    /// Addresses to notify.
    pub emails: Option<Vec<String>>,
}

impl CreateShareBody {
    /// Validate and convert into a service request, resolving relative
    /// expiry against `now`.
    pub fn into_request(self, now: DateTime<Utc>) -> AppResult<CreateShareRequest> {
        validate_body(&self)?;

        let kind: ContentKind = self.content_kind.parse()?;
        let permission = match self.permission.as_deref() {
            Some(p) => p.parse::<SharePermission>()?,
            None => SharePermission::default(),
        };

        let expires_at = match (self.expires_at, self.expires_in_hours) {
            (Some(_), Some(_)) => {
                return Err(AppError::validation(
                    "expiresAt and expiresInHours cannot be combined",
                ));
            }
            (Some(at), None) => Some(at),
            (None, Some(hours)) => Some(
                Duration::try_hours(hours)
                    .and_then(|d| now.checked_add_signed(d))
                    .ok_or_else(|| AppError::validation("expiresInHours is out of range"))?,
            ),
            (None, None) => None,
        };

        Ok(CreateShareRequest {
            content: ContentRef::new(kind, self.content_id),
            permission,
            expires_at,
            emails: self.emails.unwrap_or_default(),
        })
    }
}

/// Query string of `GET /api/todos`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListParams {
    /// Keep only this priority.
    pub priority: Option<String>,
    /// `createdAt`, `dueDate` or `priority`.
    pub sort_by: Option<String>,
}

impl TodoListParams {
    /// Parse into a typed query. Empty values count as absent.
    pub fn into_query(self) -> AppResult<TodoQuery> {
        let priority = self
            .priority
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.parse::<TodoPriority>())
            .transpose()?;
        let sort_by = self
            .sort_by
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse::<TodoSort>())
            .transpose()?
            .unwrap_or_default();
        Ok(TodoQuery { priority, sort_by })
    }
}

/// Run `validator` checks, mapping failures to a validation error.
pub fn validate_body<T: Validate>(body: &T) -> AppResult<()> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::error::ErrorKind;

    fn body(json: serde_json::Value) -> CreateShareBody {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_type_alias_and_defaults() {
        let req = body(serde_json::json!({ "type": "Note", "contentId": "n1" }))
            .into_request(Utc::now())
            .unwrap();
        assert_eq!(req.content.kind, ContentKind::Note);
        assert_eq!(req.permission, SharePermission::Read);
        assert!(req.expires_at.is_none());
        assert!(req.emails.is_empty());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = body(serde_json::json!({ "contentKind": "folder", "contentId": "x" }))
            .into_request(Utc::now())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_relative_expiry() {
        let now = Utc::now();
        let req = body(serde_json::json!({
            "contentKind": "todo",
            "contentId": "t",
            "expiresInHours": 24
        }))
        .into_request(now)
        .unwrap();
        assert_eq!(req.expires_at, Some(now + Duration::hours(24)));
    }

    #[test]
    fn test_expiry_forms_are_exclusive() {
        let err = body(serde_json::json!({
            "contentKind": "todo",
            "contentId": "t",
            "expiresAt": "2030-01-01T00:00:00Z",
            "expiresInHours": 24
        }))
        .into_request(Utc::now())
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_non_positive_hours_rejected() {
        let result = body(serde_json::json!({
            "contentKind": "todo",
            "contentId": "t",
            "expiresInHours": 0
        }))
        .into_request(Utc::now());
        assert!(result.is_err());
    }

    #[test]
    fn test_todo_params() {
        let query = TodoListParams {
            priority: Some("high".to_string()),
            sort_by: Some("".to_string()),
        }
        .into_query()
        .unwrap();
        assert_eq!(query.priority, Some(TodoPriority::High));
        assert_eq!(query.sort_by, TodoSort::CreatedAt);
    }
}
