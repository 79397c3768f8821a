//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::lifecycle::LifecycleState;
use super::role::Role;

/// A registered account in the CesiZen system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique account identifier.
    pub id: Uuid,
    /// Unique login name.
    pub login: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the account was disabled by an admin, if it is.
    pub disabled_at: Option<DateTime<Utc>>,
    /// When the account was soft-deleted, if it is.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Derive the current lifecycle state from the timestamp fields.
    ///
    /// Call sites must go through this accessor rather than inspecting the
    /// timestamps directly.
    pub fn lifecycle(&self) -> LifecycleState {
        LifecycleState::classify(self.disabled_at, self.deleted_at)
    }

    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to insert a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired login (unique).
    pub login: String,
    /// Email address (unique).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
}
