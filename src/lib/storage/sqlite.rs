use crate::core::{StoreError, Todo};
use crate::storage::TodoStore;
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::{Sqlite, SqlitePool};

/// SQLite-backed [`TodoStore`] over an sqlx connection pool.
#[derive(Clone)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `url`, creating it when missing, and runs the
    /// schema migration.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            tracing::info!(url, "creating database");
            Sqlite::create_database(url).await?;
        }
        let pool = SqlitePool::connect(url).await?;
        migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn create(&self, todo: Todo) -> Result<Todo, StoreError> {
        let response = sqlx::query("INSERT INTO todos (title, completed) VALUES (?, ?)")
            .bind(&todo.title)
            .bind(todo.completed)
            .execute(&self.pool)
            .await?;
        Ok(Todo {
            id: response.last_insert_rowid(),
            ..todo
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let todo = sqlx::query_as("SELECT id, title, completed FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as("SELECT id, title, completed FROM todos")
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn update(&self, todo: Todo) -> Result<Todo, StoreError> {
        sqlx::query("UPDATE todos SET title = ?, completed = ? WHERE id = ?")
            .bind(&todo.title)
            .bind(todo.completed)
            .bind(todo.id)
            .execute(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        // Zero rows affected is fine; delete is idempotent.
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM todos").execute(&self.pool).await?;
        Ok(())
    }
}
