//! Convenience result type alias for Planner.

use crate::error::AppError;

/// A specialized `Result` type for Planner operations.
pub type AppResult<T> = Result<T, AppError>;
