//! Access token verification.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use uuid::Uuid;

use cesizen_core::config::auth::AuthConfig;
use cesizen_core::error::AppError;
use cesizen_core::traits::Clock;
use cesizen_entity::user::Role;

use super::claims::Claims;

/// Claims as they come off the wire, before contract checks.
#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<String>,
    user_id: Option<Uuid>,
    email: Option<String>,
    role: Option<String>,
    iat: Option<i64>,
    exp: Option<i64>,
}

/// Validates access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Expected signing algorithm.
    algorithm: Algorithm,
    /// Time source for the expiry check.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let algorithm: Algorithm = config.jwt_algorithm.parse().map_err(|_| {
            AppError::configuration(format!(
                "Unsupported JWT algorithm: {}",
                config.jwt_algorithm
            ))
        })?;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            algorithm,
            clock,
        })
    }

    /// Decodes and verifies an access token string.
    ///
    /// Checks, in order:
    /// 1. Signature validity (failure collapses into a credentials error)
    /// 2. Expiry, against the injected clock
    /// 3. Subject presence
    /// 4. Role validity against the closed enumeration
    ///
    /// Verification is a pure function of the token, the server secret,
    /// and the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        // The expiry is checked manually below so that the clock stays
        // injectable; jsonwebtoken would consult the system time.
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        let data = decode::<RawClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(reason = %e, "Token signature verification failed");
            AppError::credentials()
        })?;
        let raw = data.claims;

        let exp = raw
            .exp
            .ok_or_else(|| AppError::token_malformed("Token is missing the exp claim"))?;
        if exp <= self.clock.now().timestamp() {
            return Err(AppError::token_expired());
        }

        let sub = match raw.sub {
            Some(sub) if !sub.is_empty() => sub,
            _ => return Err(AppError::token_malformed("No subject found in token")),
        };

        let role: Role = raw
            .role
            .as_deref()
            .and_then(|r| r.parse().ok())
            .ok_or_else(|| AppError::token_malformed("Role claim in token is not valid"))?;

        Ok(Claims {
            sub,
            user_id: raw.user_id,
            email: raw.email,
            role,
            iat: raw.iat,
            exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use cesizen_core::error::ErrorKind;
    use cesizen_core::traits::FixedClock;
    use chrono::{TimeZone, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            jwt_algorithm: "HS256".to_string(),
            access_ttl_minutes: 30,
            password_min_length: 10,
            password_max_length: 50,
        }
    }

    fn account() -> cesizen_entity::user::User {
        cesizen_entity::user::User {
            id: Uuid::new_v4(),
            login: "zenuser".to_string(),
            email: "zen@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::User,
            created_at: Utc::now(),
            last_login_at: None,
            disabled_at: None,
            deleted_at: None,
        }
    }

    fn clock_at(secs: i64) -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc.timestamp_opt(secs, 0).unwrap()))
    }

    #[test]
    fn round_trip_preserves_subject_and_role() {
        let config = auth_config();
        let clock = clock_at(1_700_000_000);
        let encoder = JwtEncoder::new(&config, clock.clone()).unwrap();
        let decoder = JwtDecoder::new(&config, clock).unwrap();

        let user = account();
        let token = encoder.issue(Some(&user)).unwrap();
        let claims = decoder.verify(&token).unwrap();

        assert_eq!(claims.sub, user.login);
        assert_eq!(claims.role, user.role);
        assert_eq!(claims.user_id, Some(user.id));
        assert_eq!(claims.email.as_deref(), Some("zen@example.com"));
    }

    #[test]
    fn issue_refuses_absent_account() {
        let encoder = JwtEncoder::new(&auth_config(), clock_at(1_700_000_000)).unwrap();
        let err = encoder.issue(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Credentials);
    }

    #[test]
    fn expired_token_fails_with_expiry_kind() {
        let config = auth_config();
        let issued_at = 1_700_000_000;
        let encoder = JwtEncoder::new(&config, clock_at(issued_at)).unwrap();
        let token = encoder.issue(Some(&account())).unwrap();

        // Advance past the 30-minute TTL.
        let decoder = JwtDecoder::new(&config, clock_at(issued_at + 31 * 60)).unwrap();
        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }

    #[test]
    fn still_valid_just_before_expiry() {
        let config = auth_config();
        let issued_at = 1_700_000_000;
        let encoder = JwtEncoder::new(&config, clock_at(issued_at)).unwrap();
        let token = encoder.issue(Some(&account())).unwrap();

        let decoder = JwtDecoder::new(&config, clock_at(issued_at + 29 * 60)).unwrap();
        assert!(decoder.verify(&token).is_ok());
    }

    #[test]
    fn tampered_signature_fails_with_credentials_kind() {
        let config = auth_config();
        let clock = clock_at(1_700_000_000);
        let encoder = JwtEncoder::new(&config, clock.clone()).unwrap();
        let decoder = JwtDecoder::new(&config, clock).unwrap();

        let mut token = encoder.issue(Some(&account())).unwrap();
        token.push('x');
        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Credentials);
    }

    #[test]
    fn wrong_secret_fails_with_credentials_kind() {
        let clock = clock_at(1_700_000_000);
        let encoder = JwtEncoder::new(&auth_config(), clock.clone()).unwrap();
        let token = encoder.issue(Some(&account())).unwrap();

        let mut other = auth_config();
        other.jwt_secret = "a-different-secret".to_string();
        let decoder = JwtDecoder::new(&other, clock).unwrap();
        assert_eq!(decoder.verify(&token).unwrap_err().kind, ErrorKind::Credentials);
    }

    #[test]
    fn missing_subject_fails_as_malformed() {
        let config = auth_config();
        let clock = clock_at(1_700_000_000);
        let decoder = JwtDecoder::new(&config, clock).unwrap();

        let payload = serde_json::json!({ "role": "user", "exp": 1_700_009_000 });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenMalformed);
    }

    #[test]
    fn unknown_role_fails_as_malformed() {
        let config = auth_config();
        let clock = clock_at(1_700_000_000);
        let decoder = JwtDecoder::new(&config, clock).unwrap();

        let payload = serde_json::json!({
            "sub": "zenuser",
            "role": "superuser",
            "exp": 1_700_009_000,
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenMalformed);
    }

    #[test]
    fn expiry_is_checked_before_subject_presence() {
        let config = auth_config();
        let decoder = JwtDecoder::new(&config, clock_at(1_700_009_001)).unwrap();

        // Expired AND missing subject: the expiry error must win.
        let payload = serde_json::json!({ "role": "user", "exp": 1_700_009_000 });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }
}
