//! Login event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One successful authentication, appended per login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LoginEvent {
    /// Event identifier.
    pub id: i64,
    /// The account that logged in.
    pub user_id: Uuid,
    /// When the login happened.
    pub logged_at: DateTime<Utc>,
}
