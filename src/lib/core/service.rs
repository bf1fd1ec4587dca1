use crate::core::{ServiceError, StoreError, Todo};
use crate::storage::TodoStore;

/// Business rules around a [`TodoStore`] backend. Stateless; every operation
/// round-trips to the store, so any number of calls may run concurrently.
#[derive(Clone)]
pub struct TodoService<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists a new todo and returns it with its store-assigned id.
    pub async fn add_todo(&self, todo: Todo) -> Result<Todo, ServiceError> {
        tracing::info!(title = %todo.title, "adding a new todo");
        match self.store.create(todo).await {
            Ok(saved) => {
                tracing::info!(id = saved.id, "todo added");
                Ok(saved)
            }
            Err(e) => Err(store_failure(e, "failed to add todo".to_string())),
        }
    }

    /// Updates the record addressed by `id`, taking `title` and `completed`
    /// from `todo`. The incoming `todo.id` is discarded; the path id is
    /// authoritative. Returns `None` when no such record exists.
    pub async fn update_todo(&self, id: i64, todo: Todo) -> Result<Option<Todo>, ServiceError> {
        tracing::info!(id, "updating todo");
        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| store_failure(e, format!("failed to update todo with id {id}")))?;
        let Some(mut existing) = existing else {
            tracing::warn!(id, "todo not found for update");
            return Ok(None);
        };
        existing.title = todo.title;
        existing.completed = todo.completed;
        let saved = self
            .store
            .update(existing)
            .await
            .map_err(|e| store_failure(e, format!("failed to update todo with id {id}")))?;
        tracing::info!(id = saved.id, "todo updated");
        Ok(Some(saved))
    }

    /// Deletes the record addressed by `id`. Idempotent: deleting an id that
    /// does not exist succeeds.
    pub async fn delete_todo(&self, id: i64) -> Result<(), ServiceError> {
        tracing::info!(id, "deleting todo");
        self.store
            .delete_by_id(id)
            .await
            .map_err(|e| store_failure(e, format!("failed to delete todo with id {id}")))?;
        tracing::info!(id, "todo deleted");
        Ok(())
    }

    /// Returns every persisted todo, in store order. An empty store yields an
    /// empty list.
    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, ServiceError> {
        tracing::info!("fetching all todos");
        let todos = self
            .store
            .find_all()
            .await
            .map_err(|e| store_failure(e, "failed to fetch todos".to_string()))?;
        tracing::info!(count = todos.len(), "fetched todos");
        Ok(todos)
    }

    /// Returns the todo addressed by `id`, or `None` when absent.
    pub async fn get_todo_by_id(&self, id: i64) -> Result<Option<Todo>, ServiceError> {
        tracing::info!(id, "fetching todo");
        let todo = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| store_failure(e, format!("failed to fetch todo with id {id}")))?;
        if todo.is_none() {
            tracing::warn!(id, "todo not found");
        }
        Ok(todo)
    }

    /// Deletes every persisted todo. A no-op on an empty store.
    pub async fn delete_all_todos(&self) -> Result<(), ServiceError> {
        tracing::info!("deleting all todos");
        self.store
            .delete_all()
            .await
            .map_err(|e| store_failure(e, "failed to delete all todos".to_string()))?;
        tracing::info!("all todos deleted");
        Ok(())
    }
}

fn store_failure(source: StoreError, context: String) -> ServiceError {
    tracing::error!(error = %source, "{context}");
    ServiceError::new(context, source)
}
