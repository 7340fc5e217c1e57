//! PostgreSQL to-do repository.

use async_trait::async_trait;
use sqlx::PgPool;

use planner_core::result::AppResult;
use planner_core::types::TodoId;
use planner_entity::todo::Todo;

use super::map_db_error;
use crate::repositories::TodoRepository;

/// To-do repository backed by the `todos` table.
#[derive(Debug, Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    /// Create a new to-do repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn find_all(&self) -> AppResult<Vec<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todos ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list todos"))
    }

    async fn find_by_id(&self, id: TodoId) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find todo"))
    }

    async fn create(&self, todo: &Todo) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (id, title, description, completed, priority, due_date, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(todo.id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.priority)
        .bind(todo.due_date)
        .bind(todo.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create todo"))
    }

    async fn update(&self, todo: &Todo) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>(
            "UPDATE todos SET title = $2, description = $3, completed = $4, priority = $5, \
             due_date = $6 WHERE id = $1 RETURNING *",
        )
        .bind(todo.id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.priority)
        .bind(todo.due_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to update todo"))
    }

    async fn delete(&self, id: TodoId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete todo"))?;
        Ok(result.rows_affected() > 0)
    }
}
