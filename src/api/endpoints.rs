// Todo API endpoint functions.
// Provides typed methods for the REST operations the UI drives.

use std::time::{Duration, Instant};

use crate::error::Result;

use super::client::ApiClient;
use super::types::{DataSnapshot, DonePatch, Health, NewTodo, Todo};

impl ApiClient {
    /// List all todos, in server order.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let response = self.get("/api/todos").await?;
        let todos: Vec<Todo> = response.json().await?;
        Ok(todos)
    }

    /// Create a todo with the given title. The server assigns the id and
    /// creation timestamp.
    pub async fn create_todo(&self, title: &str) -> Result<Todo> {
        let body = NewTodo {
            title: title.to_string(),
        };
        let response = self.post_json("/api/todos", &body).await?;
        let todo: Todo = response.json().await?;
        Ok(todo)
    }

    /// Set a todo's done flag, returning the updated record.
    pub async fn toggle_todo(&self, id: u64, done: bool) -> Result<Todo> {
        let body = DonePatch { done };
        let response = self
            .patch_json(&format!("/api/todos/{}", id), &body)
            .await?;
        let todo: Todo = response.json().await?;
        Ok(todo)
    }

    /// Delete a todo.
    pub async fn delete_todo(&self, id: u64) -> Result<()> {
        self.delete(&format!("/api/todos/{}", id)).await?;
        Ok(())
    }

    /// Fetch the server-computed data snapshot, measuring the full client
    /// round trip alongside the server-reported load time.
    pub async fn fetch_data(&self) -> Result<(DataSnapshot, Duration)> {
        let start = Instant::now();
        let response = self.get("/api/data").await?;
        let snapshot: DataSnapshot = response.json().await?;
        Ok((snapshot, start.elapsed()))
    }

    /// Ask the server to drop its cached snapshot.
    pub async fn clear_cache(&self) -> Result<()> {
        self.delete("/api/data").await?;
        Ok(())
    }

    /// Check server and Redis reachability.
    pub async fn health(&self) -> Result<Health> {
        let response = self.get("/api/health").await?;
        let health: Health = response.json().await?;
        Ok(health)
    }
}
