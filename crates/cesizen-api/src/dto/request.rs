//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form body (form-encoded, OAuth2 password style).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Login name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body.
///
/// Field-level policy (login format, password strength, uniqueness) is
/// enforced by the auth service so violations accumulate into one
/// response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterBody {
    /// Desired login.
    pub login: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

/// Body carrying the caller's password, re-verified before destructive
/// self-service actions.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordBody {
    /// Current password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password reset request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordBody {
    /// Current password.
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,
    /// New password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// New password, confirmed.
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
}

/// Article creation request body (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateArticleBody {
    /// Article title.
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    /// HTML body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Target category id.
    pub category: i32,
}
