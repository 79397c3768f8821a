//! User repository — lookups, registration, and the account lifecycle
//! state machine.
//!
//! Every lifecycle mutation runs as a single-row transaction: the target
//! row is locked with `SELECT ... FOR UPDATE`, the preconditions are
//! checked against the locked row, and the write commits or nothing does.
//! Two concurrent mutations on the same account therefore serialize, and
//! exactly one of two concurrent `disable` calls observes "already
//! disabled".

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use cesizen_core::error::{AppError, ErrorKind};
use cesizen_core::result::AppResult;
use cesizen_core::types::pagination::{PageRequest, PageResponse};
use cesizen_entity::user::{LifecycleState, NewUser, Role, User};

/// Repository for account storage and lifecycle operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find an account by login.
    pub async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by login", e)
            })
    }

    /// Find an account by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Insert a new account.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (login, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.login)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_login_key") => {
                AppError::conflict(format!("Login '{}' already exists", data.login))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// List accounts with pagination and optional status/role filters.
    ///
    /// The status filter works on the derived lifecycle state, expressed as
    /// predicates over the two timestamp columns.
    pub async fn find_all_paginated(
        &self,
        page: &PageRequest,
        status: Option<LifecycleState>,
        role: Option<Role>,
    ) -> AppResult<PageResponse<User>> {
        let status_predicate = match status {
            None => "TRUE",
            Some(LifecycleState::Active) => "(disabled_at IS NULL AND deleted_at IS NULL)",
            Some(LifecycleState::Disabled) => "(disabled_at IS NOT NULL AND deleted_at IS NULL)",
            Some(LifecycleState::Deleted) => "(deleted_at IS NOT NULL)",
        };

        let count_sql = format!(
            "SELECT COUNT(*) FROM users WHERE {status_predicate} AND ($1::user_role IS NULL OR role = $1)"
        );
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let list_sql = format!(
            "SELECT * FROM users WHERE {status_predicate} AND ($1::user_role IS NULL OR role = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
        let users = sqlx::query_as::<_, User>(&list_sql)
            .bind(role)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Record a successful login: overwrite `last_login_at` and append one
    /// login event, atomically.
    pub async fn record_login(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<()> {
        let mut tx = self.begin().await?;

        sqlx::query("UPDATE users SET last_login_at = $2 WHERE id = $1")
            .bind(user_id)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;

        sqlx::query("INSERT INTO login_events (user_id, logged_at) VALUES ($1, $2)")
            .bind(user_id)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert login event", e)
            })?;

        self.commit(tx).await
    }

    /// Update an account's password hash.
    pub async fn update_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(user_id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::target_not_found());
        }
        Ok(())
    }

    /// Disable an account (admin mutation).
    ///
    /// Admin immunity is checked before the lifecycle flags, so a targeted
    /// admin account reports `TargetIsAdmin` regardless of its timestamps.
    pub async fn disable(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<User> {
        let mut tx = self.begin().await?;
        let user = self.lock_row(&mut tx, id).await?;

        if user.role.is_admin() {
            return Err(AppError::target_is_admin());
        }
        match user.lifecycle() {
            LifecycleState::Deleted => return Err(AppError::target_deleted()),
            LifecycleState::Disabled => return Err(AppError::target_already_disabled()),
            LifecycleState::Active => {}
        }

        let updated =
            sqlx::query_as::<_, User>("UPDATE users SET disabled_at = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to disable user", e)
                })?;

        self.commit(tx).await?;
        Ok(updated)
    }

    /// Re-enable a disabled account (admin mutation).
    pub async fn enable(&self, id: Uuid) -> AppResult<User> {
        let mut tx = self.begin().await?;
        let user = self.lock_row(&mut tx, id).await?;

        match user.lifecycle() {
            LifecycleState::Deleted => return Err(AppError::target_deleted()),
            LifecycleState::Active => return Err(AppError::target_already_enabled()),
            LifecycleState::Disabled => {}
        }

        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET disabled_at = NULL WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to enable user", e))?;

        self.commit(tx).await?;
        Ok(updated)
    }

    /// Soft-delete an account (admin mutation). Terminal.
    pub async fn soft_delete(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<User> {
        let mut tx = self.begin().await?;
        let user = self.lock_row(&mut tx, id).await?;

        if user.role.is_admin() {
            return Err(AppError::target_is_admin());
        }
        if user.lifecycle() == LifecycleState::Deleted {
            return Err(AppError::target_already_deleted());
        }

        let updated =
            sqlx::query_as::<_, User>("UPDATE users SET deleted_at = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete user", e)
                })?;

        self.commit(tx).await?;
        Ok(updated)
    }

    /// Soft-delete the caller's own account. Unlike [`Self::soft_delete`],
    /// admin accounts may delete themselves.
    pub async fn soft_delete_own(&self, id: Uuid, now: DateTime<Utc>) -> AppResult<User> {
        let mut tx = self.begin().await?;
        let user = self.lock_row(&mut tx, id).await?;

        if user.lifecycle() == LifecycleState::Deleted {
            return Err(AppError::target_already_deleted());
        }

        let updated =
            sqlx::query_as::<_, User>("UPDATE users SET deleted_at = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete own account", e)
                })?;

        self.commit(tx).await?;
        Ok(updated)
    }

    /// Promote an account from user to admin (admin mutation).
    pub async fn promote(&self, id: Uuid) -> AppResult<User> {
        let mut tx = self.begin().await?;
        let user = self.lock_row(&mut tx, id).await?;

        if user.lifecycle() == LifecycleState::Deleted {
            return Err(AppError::target_deleted());
        }
        if user.role.is_admin() {
            return Err(AppError::target_already_admin());
        }

        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET role = 'admin' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to promote user", e))?;

        self.commit(tx).await?;
        Ok(updated)
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    async fn commit(&self, tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    /// Lock the target row for the remainder of the transaction.
    async fn lock_row(
        &self,
        tx: &mut Transaction<'static, Postgres>,
        id: Uuid,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock user row", e))?
            .ok_or_else(AppError::target_not_found)
    }
}
