//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cesizen_auth::jwt::Claims;
use cesizen_entity::user::Role;

/// Context for the current authenticated request.
///
/// Built from verified token claims by the API layer and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The caller's login (token subject).
    pub login: String,
    /// The caller's account ID, when the token carries it.
    pub user_id: Option<Uuid>,
    /// The caller's role at the time the token was issued.
    pub role: Role,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Builds a context from verified claims.
    pub fn from_claims(claims: &Claims, request_time: DateTime<Utc>) -> Self {
        Self {
            login: claims.sub.clone(),
            user_id: claims.user_id,
            role: claims.role,
            request_time,
        }
    }

    /// Returns whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
