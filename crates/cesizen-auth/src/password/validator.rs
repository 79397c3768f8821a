//! Password policy enforcement for new passwords.

use cesizen_core::config::auth::AuthConfig;
use cesizen_core::error::AppError;

/// Special characters a password must draw from.
const SPECIAL_CHARS: &str = "$@#%!^&*-_+=";

/// Validates password strength against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
    /// Maximum password length.
    max_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            max_length: config.password_max_length,
        }
    }

    /// Returns every policy violation for the candidate password.
    ///
    /// All violations are reported at once so the caller can surface a
    /// complete list rather than the first failure.
    pub fn violations(&self, password: &str) -> Vec<String> {
        let mut violations = Vec::new();

        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            violations.push(format!(
                "be between {} and {} characters",
                self.min_length, self.max_length
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push("contain a digit".to_string());
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            violations.push("contain an uppercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            violations.push("contain a lowercase letter".to_string());
        }
        if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            violations.push(format!(
                "contain a special character among \"{SPECIAL_CHARS}\""
            ));
        }

        violations
    }

    /// Validates a password against the full policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let violations = self.violations(password);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Password must: {}",
                violations.join(", ")
            )))
        }
    }
}
