//! User self-service operations — account deletion and password reset.

use std::sync::Arc;

use tracing::info;

use cesizen_auth::password::{PasswordHasher, PasswordValidator};
use cesizen_core::error::AppError;
use cesizen_core::result::AppResult;
use cesizen_core::traits::Clock;
use cesizen_database::repositories::user::UserRepository;
use cesizen_entity::user::User;

/// Handles operations an account performs on itself.
#[derive(Clone)]
pub struct UserService {
    /// Account storage.
    user_repo: Arc<UserRepository>,
    /// Password hashing capability.
    hasher: Arc<dyn PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user self-service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        validator: Arc<PasswordValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            clock,
        }
    }

    /// Soft-deletes the caller's own account.
    ///
    /// The password is re-verified even though the caller holds a valid
    /// token, so a stolen token alone cannot destroy the account. Unlike
    /// the admin-initiated deletion, this path is open to admins too.
    pub async fn self_delete(&self, account: &User, password: &str) -> AppResult<()> {
        if !self.hasher.verify(password, &account.password_hash)? {
            return Err(AppError::credentials());
        }

        self.user_repo
            .soft_delete_own(account.id, self.clock.now())
            .await?;

        info!(user_id = %account.id, "Account self-deleted");
        Ok(())
    }

    /// Resets the caller's password after re-verifying the old one.
    pub async fn reset_password(
        &self,
        account: &User,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> AppResult<()> {
        if !self.hasher.verify(old_password, &account.password_hash)? {
            return Err(AppError::credentials());
        }

        self.validator.validate(new_password)?;
        if new_password != confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }

        let new_hash = self.hasher.hash(new_password)?;
        self.user_repo.update_password(account.id, &new_hash).await?;

        info!(user_id = %account.id, "Password reset");
        Ok(())
    }
}
