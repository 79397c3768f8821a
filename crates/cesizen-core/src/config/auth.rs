//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Signing algorithms accepted with a shared symmetric secret.
const HMAC_ALGORITHMS: &[&str] = &["HS256", "HS384", "HS512"];

/// Authentication and credential configuration.
///
/// The secret, algorithm, and TTL are deliberately defaultless: the process
/// must refuse to start without explicit values for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing.
    pub jwt_secret: String,
    /// JWT signing algorithm identifier (HMAC family).
    pub jwt_algorithm: String,
    /// Access token TTL in minutes.
    pub access_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
}

impl AuthConfig {
    /// Validate startup invariants that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if !HMAC_ALGORITHMS.contains(&self.jwt_algorithm.as_str()) {
            return Err(AppError::configuration(format!(
                "auth.jwt_algorithm '{}' is not supported; expected one of: {}",
                self.jwt_algorithm,
                HMAC_ALGORITHMS.join(", ")
            )));
        }
        Ok(())
    }
}

fn default_password_min() -> usize {
    10
}

fn default_password_max() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(algorithm: &str, secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_algorithm: algorithm.to_string(),
            access_ttl_minutes: 30,
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
        }
    }

    #[test]
    fn accepts_hmac_family() {
        for alg in ["HS256", "HS384", "HS512"] {
            assert!(config(alg, "secret").validate().is_ok());
        }
    }

    #[test]
    fn rejects_non_hmac_or_empty_secret() {
        assert!(config("RS256", "secret").validate().is_err());
        assert!(config("HS256", "").validate().is_err());
    }
}
