//! Login event repository implementation.
//!
//! Events are appended by [`super::user::UserRepository::record_login`]
//! inside the login transaction; this repository only reads them.

use sqlx::PgPool;
use uuid::Uuid;

use cesizen_core::error::{AppError, ErrorKind};
use cesizen_core::result::AppResult;
use cesizen_entity::login_event::LoginEvent;

/// Repository for login event queries.
#[derive(Debug, Clone)]
pub struct LoginEventRepository {
    pool: PgPool,
}

impl LoginEventRepository {
    /// Create a new login event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count the events recorded for one account.
    pub async fn count_for_user(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM login_events WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count login events", e)
            })
    }

    /// List the events recorded for one account, newest first.
    pub async fn find_for_user(&self, user_id: Uuid) -> AppResult<Vec<LoginEvent>> {
        sqlx::query_as::<_, LoginEvent>(
            "SELECT * FROM login_events WHERE user_id = $1 ORDER BY logged_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list login events", e))
    }
}
