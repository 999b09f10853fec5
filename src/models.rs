//! The item row and its request payload.

use serde::{Deserialize, Serialize};

/// A stored item. `id` is assigned by the database and never set by clients.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Create/update payload. Both fields must be present, non-null strings;
/// extra keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
}
