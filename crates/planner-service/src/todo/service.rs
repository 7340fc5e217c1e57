//! To-do CRUD service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use planner_core::error::AppError;
use planner_core::result::AppResult;
use planner_core::types::TodoId;
use planner_database::repositories::TodoRepository;
use planner_entity::todo::{CreateTodo, Todo, UpdateTodo};

use super::query::TodoQuery;

/// Manages to-do items.
#[derive(Debug, Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    /// Creates a new to-do service.
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Lists items matching `query`.
    pub async fn list(&self, query: TodoQuery) -> AppResult<Vec<Todo>> {
        let mut todos = self.repo.find_all().await?;
        query.apply(&mut todos);
        Ok(todos)
    }

    /// Gets a single item.
    pub async fn get(&self, id: TodoId) -> AppResult<Todo> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Todo not found"))
    }

    /// Creates an item.
    pub async fn create(&self, data: CreateTodo) -> AppResult<Todo> {
        let todo = Todo::create(data, Utc::now())?;
        let todo = self.repo.create(&todo).await?;
        info!(todo_id = %todo.id, "Todo created");
        Ok(todo)
    }

    /// Applies a partial update.
    pub async fn update(&self, id: TodoId, changes: UpdateTodo) -> AppResult<Todo> {
        let mut todo = self.get(id).await?;
        todo.apply(changes)?;
        self.repo
            .update(&todo)
            .await?
            .ok_or_else(|| AppError::not_found("Todo not found"))
    }

    /// Deletes an item. Shares pointing at it are left in place.
    pub async fn delete(&self, id: TodoId) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Todo not found"));
        }
        info!(todo_id = %id, "Todo deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::error::ErrorKind;
    use planner_database::memory::MemoryTodoRepository;

    fn service() -> TodoService {
        TodoService::new(Arc::new(MemoryTodoRepository::new()))
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let err = service()
            .update(TodoId::new(), UpdateTodo::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let svc = service();
        let todo = svc
            .create(CreateTodo {
                title: "x".to_string(),
                ..CreateTodo::default()
            })
            .await
            .unwrap();
        svc.delete(todo.id).await.unwrap();
        assert_eq!(
            svc.delete(todo.id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }
}
