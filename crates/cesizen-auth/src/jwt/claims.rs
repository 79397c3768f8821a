//! JWT claims structure carried by access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cesizen_entity::user::Role;

/// Decoded claims of a verified access token.
///
/// The subject is the account login. `user_id`, `email`, and `iat` are
/// present on every token this server issues, but verification does not
/// require them; only the subject, role, and expiry are checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account login.
    pub sub: String,
    /// Account ID.
    pub user_id: Option<Uuid>,
    /// Account email.
    pub email: Option<String>,
    /// Role at the time of token issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
