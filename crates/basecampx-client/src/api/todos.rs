//! Todos API.

use serde_json::Value;

use super::ProjectScope;
use crate::error::Result;
use crate::types::TodoRequest;

/// Todos API client.
pub struct TodosApi {
    scope: ProjectScope,
}

impl TodosApi {
    pub(crate) fn new(scope: ProjectScope) -> Self {
        Self { scope }
    }

    fn path(&self, todo_id: u64) -> String {
        self.scope.path(&format!("todos/{}", todo_id))
    }

    pub async fn get(&self, todo_id: u64) -> Result<Value> {
        self.scope.client.get(&self.path(todo_id)).await
    }

    /// Add a todo to a todo list.
    pub async fn create(&self, todolist_id: u64, request: TodoRequest) -> Result<Value> {
        let path = self
            .scope
            .path(&format!("todolists/{}/todos", todolist_id));
        self.scope.client.post(&path, &request).await
    }

    /// Update a todo. Besides the creation fields, `completed` and
    /// `position` may be set.
    pub async fn update(&self, todo_id: u64, request: TodoRequest) -> Result<Value> {
        self.scope.client.put(&self.path(todo_id), &request).await
    }

    pub async fn delete(&self, todo_id: u64) -> Result<()> {
        self.scope.client.delete(&self.path(todo_id)).await
    }
}
