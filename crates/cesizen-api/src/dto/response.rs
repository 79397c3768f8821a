//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cesizen_core::types::pagination::PageResponse;
use cesizen_entity::user::{LifecycleState, Role, User};

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always `"bearer"`.
    pub token_type: String,
    /// The issued access token.
    pub access_token: String,
}

impl LoginResponse {
    /// Wraps a freshly issued token.
    pub fn bearer(access_token: String) -> Self {
        Self {
            token_type: "bearer".to_string(),
            access_token,
        }
    }
}

/// Profile projection of the authenticated account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login name.
    pub login: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: Role,
    /// Last successful login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            login: user.login,
            email: user.email,
            role: user.role,
            last_login_at: user.last_login_at,
        }
    }
}

/// Projection returned after successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// Login name.
    pub login: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: Role,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            login: user.login,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Full account view for the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserView {
    /// Account ID.
    pub id: Uuid,
    /// Login name.
    pub login: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: Role,
    /// Derived lifecycle state.
    pub status: LifecycleState,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last successful login.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Disable timestamp, if disabled.
    pub disabled_at: Option<DateTime<Utc>>,
    /// Deletion timestamp, if deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<User> for AdminUserView {
    fn from(user: User) -> Self {
        let status = user.lifecycle();
        Self {
            id: user.id,
            login: user.login,
            email: user.email,
            role: user.role,
            status,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
            disabled_at: user.disabled_at,
            deleted_at: user.deleted_at,
        }
    }
}

/// Paginated admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserPage {
    /// Accounts on this page.
    pub users: Vec<AdminUserView>,
    /// Total matching accounts.
    pub total_users: u64,
    /// Total pages.
    pub total_pages: u64,
    /// Current page (1-based).
    pub current_page: u64,
}

impl From<PageResponse<User>> for AdminUserPage {
    fn from(page: PageResponse<User>) -> Self {
        Self {
            total_users: page.total_items,
            total_pages: page.total_pages,
            current_page: page.page,
            users: page.items.into_iter().map(AdminUserView::from).collect(),
        }
    }
}

/// Article listing wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCollection<T: Serialize> {
    /// The articles.
    pub articles: Vec<T>,
    /// How many there are.
    pub count: usize,
}

impl<T: Serialize> ArticleCollection<T> {
    /// Wraps a list of articles.
    pub fn new(articles: Vec<T>) -> Self {
        let count = articles.len();
        Self { articles, count }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Wraps a message string.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database status.
    pub database: String,
}
