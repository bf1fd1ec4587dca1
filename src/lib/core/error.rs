use thiserror::Error;

/// Failure raised by a [`TodoStore`](crate::storage::TodoStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Failure at the service boundary: the operation that failed plus the
/// underlying store error as its source. Absence of a record is never an
/// error; lookups signal it with `Option::None` instead.
#[derive(Error, Debug)]
#[error("{context}")]
pub struct ServiceError {
    context: String,
    #[source]
    source: StoreError,
}

impl ServiceError {
    pub fn new(context: impl Into<String>, source: StoreError) -> Self {
        Self {
            context: context.into(),
            source,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}
