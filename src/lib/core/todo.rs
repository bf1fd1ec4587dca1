use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single todo item. `id` is assigned by the store on creation; a value of
/// zero marks a record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, FromRow)]
pub struct Todo {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
