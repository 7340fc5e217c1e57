//! To-do persistence contract.

use async_trait::async_trait;

use planner_core::result::AppResult;
use planner_core::types::TodoId;
use planner_entity::todo::Todo;

/// Storage for to-do items.
#[async_trait]
pub trait TodoRepository: Send + Sync + std::fmt::Debug + 'static {
    /// All items, oldest first.
    async fn find_all(&self) -> AppResult<Vec<Todo>>;

    /// A single item.
    async fn find_by_id(&self, id: TodoId) -> AppResult<Option<Todo>>;

    /// Persist a new item.
    async fn create(&self, todo: &Todo) -> AppResult<Todo>;

    /// Overwrite an existing item. Returns `None` if it does not exist.
    async fn update(&self, todo: &Todo) -> AppResult<Option<Todo>>;

    /// Remove an item. Returns whether a row was deleted.
    async fn delete(&self, id: TodoId) -> AppResult<bool>;
}
