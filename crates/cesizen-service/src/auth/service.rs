//! Authentication service — the account directory's login-facing side.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use cesizen_auth::jwt::JwtEncoder;
use cesizen_auth::password::{PasswordHasher, PasswordValidator};
use cesizen_core::error::{AppError, FieldError};
use cesizen_core::result::AppResult;
use cesizen_core::traits::Clock;
use cesizen_database::repositories::user::UserRepository;
use cesizen_entity::user::{LifecycleState, NewUser, Role, User};

/// Login name length bounds.
const MIN_LOGIN_LENGTH: usize = 4;
const MAX_LOGIN_LENGTH: usize = 15;

/// Handles authentication, registration, and current-account resolution.
#[derive(Clone)]
pub struct AuthService {
    /// Account storage.
    user_repo: Arc<UserRepository>,
    /// Password hashing capability.
    hasher: Arc<dyn PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The freshly issued access token.
    pub access_token: String,
    /// The authenticated account, with `last_login_at` already updated.
    pub user: User,
}

/// Data submitted at registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Desired login.
    pub login: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
            clock,
        }
    }

    /// Authenticates a login/password pair.
    ///
    /// An unknown login and a wrong password produce the same credentials
    /// error; disabled and deleted accounts fail with their own kinds,
    /// which the API boundary collapses to the same generic message.
    /// On success the login is recorded (timestamp overwrite plus one
    /// appended login event, in one transaction).
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_login(login)
            .await?
            .ok_or_else(AppError::credentials)?;

        match user.lifecycle() {
            LifecycleState::Deleted => return Err(AppError::account_deleted()),
            LifecycleState::Disabled => return Err(AppError::account_disabled()),
            LifecycleState::Active => {}
        }

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::credentials());
        }

        let now = self.clock.now();
        self.user_repo.record_login(user.id, now).await?;

        info!(user_id = %user.id, login = %user.login, "User authenticated");

        Ok(User {
            last_login_at: Some(now),
            ..user
        })
    }

    /// Authenticates and issues an access token.
    pub async fn login(&self, login: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self.authenticate(login, password).await?;
        let access_token = self.encoder.issue(Some(&user))?;
        Ok(LoginOutcome { access_token, user })
    }

    /// Registers a new account with role `user`.
    ///
    /// Field violations accumulate: a request with a taken login AND a
    /// taken email reports both at once.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        let mut fields: BTreeMap<String, FieldError> = BTreeMap::new();

        let login = req.login.trim();
        if login.len() < MIN_LOGIN_LENGTH || login.len() > MAX_LOGIN_LENGTH {
            fields.insert(
                "login".to_string(),
                FieldError::new(
                    "length",
                    format!(
                        "Login must be between {MIN_LOGIN_LENGTH} and {MAX_LOGIN_LENGTH} characters"
                    ),
                ),
            );
        } else if !login.chars().all(|c| c.is_alphanumeric()) {
            fields.insert(
                "login".to_string(),
                FieldError::new("format", "Login must contain only alphanumeric characters"),
            );
        }

        let email = req.email.trim();
        if !is_plausible_email(email) {
            fields.insert(
                "email".to_string(),
                FieldError::new("format", "Email address is not valid"),
            );
        }

        let violations = self.validator.violations(&req.password);
        if !violations.is_empty() {
            fields.insert(
                "password".to_string(),
                FieldError::new(
                    "policy",
                    format!("Password must: {}", violations.join(", ")),
                ),
            );
        }
        if req.password != req.confirm_password {
            fields.insert(
                "confirm_password".to_string(),
                FieldError::new("mismatch", "Passwords do not match"),
            );
        }

        // Uniqueness checks only run for well-formed identifiers.
        if !fields.contains_key("login")
            && self.user_repo.find_by_login(login).await?.is_some()
        {
            fields.insert(
                "login".to_string(),
                FieldError::new("already_exists", "This login is already taken"),
            );
        }
        if !fields.contains_key("email") && self.user_repo.find_by_email(email).await?.is_some() {
            fields.insert(
                "email".to_string(),
                FieldError::new("already_exists", "This email is already in use"),
            );
        }

        if !fields.is_empty() {
            return Err(AppError::validation_fields(fields));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let user = self
            .user_repo
            .create(&NewUser {
                login: login.to_string(),
                email: email.to_string(),
                password_hash,
                role: Role::User,
            })
            .await?;

        info!(user_id = %user.id, login = %user.login, "User registered");
        Ok(user)
    }

    /// Resolves the account behind a verified token subject.
    ///
    /// The account must still exist and be active: a token that outlives
    /// its account (or an account disabled since issuance) cannot be used
    /// to read the profile.
    pub async fn current_user(&self, login: &str) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_login(login)
            .await?
            .ok_or_else(AppError::credentials)?;

        match user.lifecycle() {
            LifecycleState::Deleted => Err(AppError::account_deleted()),
            LifecycleState::Disabled => Err(AppError::account_disabled()),
            LifecycleState::Active => Ok(user),
        }
    }
}

/// Cheap structural email check; full RFC validation is not attempted.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("a.b@sub.example.org"));
        assert!(!is_plausible_email("userexample.com"));
        assert!(!is_plausible_email("user@"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@nodot"));
        assert!(!is_plausible_email("user@.com"));
    }
}
