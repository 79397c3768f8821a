//! Unified application error types for CesiZen.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The `kind` field drives the HTTP
//! status and message-collapsing rules at the API boundary.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Message returned for every credentials-class failure.
///
/// Unknown user, wrong password, and a bad token signature must all be
/// indistinguishable to the caller, so they share this single message.
pub const CREDENTIALS_MESSAGE: &str = "Incorrect username or password";

/// Message returned when a valid token has lapsed.
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token has expired, please log in again";

/// Message returned when policy denies the resolved role.
pub const INSUFFICIENT_ROLE_MESSAGE: &str = "insufficient role";

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Bad username/password combination, or a token signature that does
    /// not verify.
    Credentials,
    /// The token was valid but its expiry has passed.
    TokenExpired,
    /// The token decoded but lacks a subject or carries an unknown role.
    TokenMalformed,
    /// The account is disabled (login-time check).
    AccountDisabled,
    /// The account is soft-deleted (login-time check).
    AccountDeleted,
    /// Policy denied the (role, path, verb) triple.
    PolicyDenied,
    /// Admin mutation target does not exist.
    TargetNotFound,
    /// Admin mutation target is soft-deleted.
    TargetDeleted,
    /// Admin mutation target holds the admin role.
    TargetIsAdmin,
    /// Admin mutation target is already disabled.
    TargetAlreadyDisabled,
    /// Admin mutation target is already enabled.
    TargetAlreadyEnabled,
    /// Mutation target is already soft-deleted.
    TargetAlreadyDeleted,
    /// Promotion target already holds the admin role.
    TargetAlreadyAdmin,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry, concurrent modification, etc.).
    Conflict,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Credentials => write!(f, "CREDENTIALS"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::TokenMalformed => write!(f, "TOKEN_MALFORMED"),
            Self::AccountDisabled => write!(f, "ACCOUNT_DISABLED"),
            Self::AccountDeleted => write!(f, "ACCOUNT_DELETED"),
            Self::PolicyDenied => write!(f, "POLICY_DENIED"),
            Self::TargetNotFound => write!(f, "TARGET_NOT_FOUND"),
            Self::TargetDeleted => write!(f, "TARGET_DELETED"),
            Self::TargetIsAdmin => write!(f, "TARGET_IS_ADMIN"),
            Self::TargetAlreadyDisabled => write!(f, "TARGET_ALREADY_DISABLED"),
            Self::TargetAlreadyEnabled => write!(f, "TARGET_ALREADY_ENABLED"),
            Self::TargetAlreadyDeleted => write!(f, "TARGET_ALREADY_DELETED"),
            Self::TargetAlreadyAdmin => write!(f, "TARGET_ALREADY_ADMIN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// A single field-level validation violation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    /// Machine-readable violation type (e.g. `"already_exists"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable message for the field.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// The unified application error used throughout CesiZen.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Field-level violations, present only for validation errors.
    pub fields: Option<BTreeMap<String, FieldError>>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a credentials error carrying the shared generic message.
    pub fn credentials() -> Self {
        Self::new(ErrorKind::Credentials, CREDENTIALS_MESSAGE)
    }

    /// Create a token-expired error.
    pub fn token_expired() -> Self {
        Self::new(ErrorKind::TokenExpired, TOKEN_EXPIRED_MESSAGE)
    }

    /// Create a malformed-token error with an internal reason.
    ///
    /// The reason is logged at the API boundary but never surfaced to the
    /// caller, who sees the generic credentials message instead.
    pub fn token_malformed(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenMalformed, reason)
    }

    /// Create a disabled-account error.
    pub fn account_disabled() -> Self {
        Self::new(ErrorKind::AccountDisabled, "This account is disabled")
    }

    /// Create a deleted-account error.
    pub fn account_deleted() -> Self {
        Self::new(ErrorKind::AccountDeleted, "This account is deleted")
    }

    /// Create a policy-denied error.
    pub fn policy_denied() -> Self {
        Self::new(ErrorKind::PolicyDenied, INSUFFICIENT_ROLE_MESSAGE)
    }

    /// Create a target-not-found error (admin mutation).
    pub fn target_not_found() -> Self {
        Self::new(ErrorKind::TargetNotFound, "Target account does not exist")
    }

    /// Create a target-deleted error (admin mutation).
    pub fn target_deleted() -> Self {
        Self::new(ErrorKind::TargetDeleted, "Target account is deleted")
    }

    /// Create a target-is-admin error (admin mutation).
    pub fn target_is_admin() -> Self {
        Self::new(ErrorKind::TargetIsAdmin, "Target account is an administrator")
    }

    /// Create an already-disabled error (admin mutation).
    pub fn target_already_disabled() -> Self {
        Self::new(
            ErrorKind::TargetAlreadyDisabled,
            "Target account is already disabled",
        )
    }

    /// Create an already-enabled error (admin mutation).
    pub fn target_already_enabled() -> Self {
        Self::new(
            ErrorKind::TargetAlreadyEnabled,
            "Target account is already enabled",
        )
    }

    /// Create an already-deleted error.
    pub fn target_already_deleted() -> Self {
        Self::new(
            ErrorKind::TargetAlreadyDeleted,
            "Target account is already deleted",
        )
    }

    /// Create an already-admin error (promotion).
    pub fn target_already_admin() -> Self {
        Self::new(
            ErrorKind::TargetAlreadyAdmin,
            "Target account is already an administrator",
        )
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a validation error with field-level detail.
    pub fn validation_fields(fields: BTreeMap<String, FieldError>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: "Validation failed".to_string(),
            fields: Some(fields),
            source: None,
        }
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error belongs to the credentials class that must be
    /// collapsed to a single generic message at the HTTP boundary.
    pub fn is_credentials_class(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Credentials
                | ErrorKind::TokenMalformed
                | ErrorKind::AccountDisabled
                | ErrorKind::AccountDeleted
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            fields: self.fields.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
