//! Maps domain `AppError` values to HTTP responses.
//!
//! The envelope is `{"message": ...}` for generic errors and
//! `{"message": ..., "errors": {field: {"type": ..., "message": ...}}}`
//! for validation failures. Credentials-class kinds collapse onto one
//! generic message so that callers cannot tell an unknown user from a
//! wrong password from a bad signature.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use cesizen_core::error::{AppError, CREDENTIALS_MESSAGE, ErrorKind, FieldError};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub message: String,
    /// Field-level violations, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, FieldError>>,
}

/// Newtype wrapper so that `AppError` can cross the Axum response boundary.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets domain
/// errors propagate with `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, violations) in errors.field_errors() {
            if let Some(first) = violations.first() {
                let message = first
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                fields.insert(
                    field.to_string(),
                    FieldError::new(first.code.to_string(), message),
                );
            }
        }
        Self(AppError::validation_fields(fields))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let status = match err.kind {
            ErrorKind::Credentials
            | ErrorKind::TokenExpired
            | ErrorKind::TokenMalformed
            | ErrorKind::AccountDisabled
            | ErrorKind::AccountDeleted
            | ErrorKind::PolicyDenied => StatusCode::UNAUTHORIZED,
            ErrorKind::Validation
            | ErrorKind::TargetNotFound
            | ErrorKind::TargetDeleted
            | ErrorKind::TargetIsAdmin
            | ErrorKind::TargetAlreadyDisabled
            | ErrorKind::TargetAlreadyEnabled
            | ErrorKind::TargetAlreadyDeleted
            | ErrorKind::TargetAlreadyAdmin => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The malformed-token reason stays in the logs; externally it is
        // indistinguishable from any other credentials failure.
        let message = if err.is_credentials_class() {
            if err.kind != ErrorKind::Credentials {
                tracing::warn!(kind = %err.kind, reason = %err.message, "Credentials-class rejection");
            }
            CREDENTIALS_MESSAGE.to_string()
        } else {
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
            }
            err.message
        };

        let body = ErrorBody {
            message,
            errors: err.fields,
        };

        (status, Json(body)).into_response()
    }
}
