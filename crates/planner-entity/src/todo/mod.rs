//! To-do domain records.

pub mod model;
pub mod priority;

pub use model::{CreateTodo, Todo, UpdateTodo};
pub use priority::TodoPriority;
