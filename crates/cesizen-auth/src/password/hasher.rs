//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use cesizen_core::error::AppError;

/// Opaque password hashing capability.
///
/// The verification step is expected to be constant-time with respect to
/// the password; that property is delegated to the implementation.
pub trait PasswordHasher: Send + Sync + std::fmt::Debug {
    /// Hashes a plaintext password.
    fn hash(&self, plain: &str) -> Result<String, AppError>;

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, AppError>;
}

/// Production hasher using Argon2id with a random salt per hash.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Creates a new hasher instance.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    fn verify(&self, plain: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(plain.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("Securepass1!").unwrap();
        assert!(hasher.verify("Securepass1!", &hash).unwrap());
        assert!(!hasher.verify("Wrongpass1!", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("Securepass1!").unwrap();
        let second = hasher.hash("Securepass1!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_is_an_internal_error() {
        let hasher = Argon2Hasher::new();
        assert!(hasher.verify("whatever", "not-a-phc-string").is_err());
    }
}
