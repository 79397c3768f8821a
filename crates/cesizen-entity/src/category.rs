//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A content category articles are filed under.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Category identifier.
    pub id: i32,
    /// Display label (unique-ish, indexed).
    pub label: String,
}
