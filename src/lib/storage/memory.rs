use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::{StoreError, Todo};
use crate::storage::TodoStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// In-memory [`TodoStore`]. Nothing survives the process; ids are assigned
/// monotonically starting at 1, like the SQLite backend's rowids.
#[derive(Clone, Default)]
pub struct MemoryTodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create(&self, mut todo: Todo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        todo.id = inner.next_id;
        inner.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, todo: Todo) -> Result<Todo, StoreError> {
        self.inner.write().await.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.inner.write().await.rows.clear();
        Ok(())
    }
}
