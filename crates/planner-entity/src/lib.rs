//! # planner-entity
//!
//! Domain records for Planner. Every struct in this crate represents a
//! database row or a domain value object. Persisted records additionally
//! derive `sqlx::FromRow`.
//!
//! Records serialize in camelCase, matching the JSON the front-end reads.

pub mod content;
pub mod event;
pub mod form;
pub mod note;
pub mod share;
pub mod todo;

pub use content::SharedContent;

/// Reject blank strings for required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> planner_core::AppResult<()> {
    if value.trim().is_empty() {
        return Err(planner_core::AppError::validation(format!(
            "{field} is required"
        )));
    }
    Ok(())
}
