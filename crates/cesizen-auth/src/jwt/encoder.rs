//! Access token creation with configurable signing and TTL.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use cesizen_core::config::auth::AuthConfig;
use cesizen_core::error::AppError;
use cesizen_core::traits::Clock;
use cesizen_entity::user::User;

use super::claims::Claims;

/// Creates signed access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Signing algorithm.
    algorithm: Algorithm,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Time source for issuance and expiry stamps.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.algorithm)
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// The algorithm string has been validated at config load, so an
    /// unparseable value here is a configuration error.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let algorithm: Algorithm = config.jwt_algorithm.parse().map_err(|_| {
            AppError::configuration(format!(
                "Unsupported JWT algorithm: {}",
                config.jwt_algorithm
            ))
        })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            algorithm,
            access_ttl_minutes: config.access_ttl_minutes as i64,
            clock,
        })
    }

    /// Issues an access token for the given account.
    ///
    /// An absent account is a caller error and fails with a credentials
    /// error; a token must never be issued for nobody.
    pub fn issue(&self, account: Option<&User>) -> Result<String, AppError> {
        let account = account.ok_or_else(AppError::credentials)?;

        let now = self.clock.now();
        let exp = now + chrono::Duration::minutes(self.access_ttl_minutes);

        let claims = Claims {
            sub: account.login.clone(),
            user_id: Some(account.id),
            email: Some(account.email.clone()),
            role: account.role,
            iat: Some(now.timestamp()),
            exp: exp.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}
