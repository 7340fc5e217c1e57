//! To-do use cases.

pub mod query;
pub mod service;

pub use query::{TodoQuery, TodoSort};
pub use service::TodoService;
