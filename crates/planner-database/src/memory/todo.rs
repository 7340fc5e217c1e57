//! In-memory to-do store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use planner_core::result::AppResult;
use planner_core::types::TodoId;
use planner_entity::todo::Todo;

use crate::repositories::TodoRepository;

/// To-do store held in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoRepository {
    rows: Arc<DashMap<TodoId, Todo>>,
}

impl MemoryTodoRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        let mut todos: Vec<Todo> = self.rows.iter().map(|r| r.value().clone()).collect();
        todos.sort_by_key(|t| t.created_at);
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> AppResult<Option<Todo>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn create(&self, todo: &Todo) -> AppResult<Todo> {
        self.rows.insert(todo.id, todo.clone());
        Ok(todo.clone())
    }

    async fn update(&self, todo: &Todo) -> AppResult<Option<Todo>> {
        Ok(self.rows.get_mut(&todo.id).map(|mut row| {
            *row = todo.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: TodoId) -> AppResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }
}
