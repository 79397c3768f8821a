//! Admin account management — listing and lifecycle mutations.
//!
//! Route-level authorization has already happened at the request gate by
//! the time these methods run; they only enforce the lifecycle contracts.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use cesizen_core::result::AppResult;
use cesizen_core::traits::Clock;
use cesizen_core::types::pagination::{PageRequest, PageResponse};
use cesizen_database::repositories::user::UserRepository;
use cesizen_entity::user::{LifecycleState, Role, User};

/// Handles administrative account management operations.
#[derive(Clone)]
pub struct UserAdminService {
    /// Account storage.
    user_repo: Arc<UserRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for UserAdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAdminService").finish_non_exhaustive()
    }
}

impl UserAdminService {
    /// Creates a new admin service.
    pub fn new(user_repo: Arc<UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    /// Lists accounts with pagination and optional status/role filters.
    pub async fn list_users(
        &self,
        page: PageRequest,
        status: Option<LifecycleState>,
        role: Option<Role>,
    ) -> AppResult<PageResponse<User>> {
        self.user_repo
            .find_all_paginated(&page, status, role)
            .await
    }

    /// Disables an account. Fails on missing, deleted, admin, or
    /// already-disabled targets.
    pub async fn disable(&self, id: Uuid) -> AppResult<User> {
        let user = self.user_repo.disable(id, self.clock.now()).await?;
        info!(user_id = %id, "Account disabled");
        Ok(user)
    }

    /// Re-enables a disabled account. Fails on missing, deleted, or
    /// already-enabled targets.
    pub async fn enable(&self, id: Uuid) -> AppResult<User> {
        let user = self.user_repo.enable(id).await?;
        info!(user_id = %id, "Account enabled");
        Ok(user)
    }

    /// Soft-deletes an account. Terminal; fails on missing, already-deleted,
    /// or admin targets.
    pub async fn delete(&self, id: Uuid) -> AppResult<User> {
        let user = self.user_repo.soft_delete(id, self.clock.now()).await?;
        info!(user_id = %id, "Account deleted");
        Ok(user)
    }

    /// Promotes a user account to admin. Fails on missing, deleted, or
    /// already-admin targets.
    pub async fn promote(&self, id: Uuid) -> AppResult<User> {
        let user = self.user_repo.promote(id).await?;
        info!(user_id = %id, "Account promoted to admin");
        Ok(user)
    }
}
