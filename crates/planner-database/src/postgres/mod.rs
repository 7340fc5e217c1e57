//! PostgreSQL providers.

pub mod event;
pub mod note;
pub(crate) mod pool;
pub mod share;
pub mod todo;

pub use event::PgEventRepository;
pub use note::PgNoteRepository;
pub use share::PgShareRepository;
pub use todo::PgTodoRepository;

use planner_core::error::{AppError, ErrorKind};

/// Wrap a sqlx error, classifying unique-constraint violations as conflicts.
pub(crate) fn map_db_error(err: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::with_source(ErrorKind::Conflict, context.to_string(), err);
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
