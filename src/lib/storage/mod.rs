pub mod memory;
pub mod sqlite;

use crate::core::{StoreError, Todo};
use async_trait::async_trait;

/// Persistence contract for todo records. Implementations own the persisted
/// representation entirely; the service layer holds no state between calls.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Persists a new record and returns it with its assigned id.
    async fn create(&self, todo: Todo) -> Result<Todo, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;
    /// Persists a full replacement of the existing record addressed by
    /// `todo.id`.
    async fn update(&self, todo: Todo) -> Result<Todo, StoreError>;
    /// Deleting an id with no matching row is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
    async fn delete_all(&self) -> Result<(), StoreError>;
}
