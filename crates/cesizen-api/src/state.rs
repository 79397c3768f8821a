//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use cesizen_auth::jwt::decoder::JwtDecoder;
use cesizen_auth::jwt::encoder::JwtEncoder;
use cesizen_auth::password::hasher::{Argon2Hasher, PasswordHasher};
use cesizen_auth::password::validator::PasswordValidator;
use cesizen_auth::policy::enforcer::PolicyEnforcer;
use cesizen_auth::policy::store::PolicyStore;
use cesizen_core::config::AppConfig;
use cesizen_core::error::AppError;
use cesizen_core::traits::{Clock, SystemClock};

use cesizen_database::repositories::article::ArticleRepository;
use cesizen_database::repositories::category::CategoryRepository;
use cesizen_database::repositories::exercise::ExerciseRepository;
use cesizen_database::repositories::user::UserRepository;

use cesizen_service::article::ArticleService;
use cesizen_service::auth::AuthService;
use cesizen_service::category::CategoryService;
use cesizen_service::exercise::ExerciseService;
use cesizen_service::user::{UserAdminService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Time source
    pub clock: Arc<dyn Clock>,

    // ── Auth ─────────────────────────────────────────────────
    /// Access token issuer
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Access token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hashing capability (Argon2id in production)
    pub password_hasher: Arc<dyn PasswordHasher>,
    /// Authorization policy enforcer
    pub policy_enforcer: Arc<PolicyEnforcer>,

    // ── Repositories ─────────────────────────────────────────
    /// Account repository
    pub user_repo: Arc<UserRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Authentication service
    pub auth_service: Arc<AuthService>,
    /// User self-service
    pub user_service: Arc<UserService>,
    /// Admin account management service
    pub user_admin_service: Arc<UserAdminService>,
    /// Article service
    pub article_service: Arc<ArticleService>,
    /// Category service
    pub category_service: Arc<CategoryService>,
    /// Exercise service
    pub exercise_service: Arc<ExerciseService>,
}

impl AppState {
    /// Wires the full dependency graph over an established pool.
    ///
    /// The policy table is loaded here, once; enforcement never touches the
    /// filesystem afterwards.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Result<Self, AppError> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self::build_with(config, db_pool, clock, Arc::new(Argon2Hasher::new()))
    }

    /// Variant of [`Self::build`] with an explicit clock and hasher, used
    /// by tests to pin time and skip expensive hashing.
    pub fn build_with(
        config: AppConfig,
        db_pool: PgPool,
        clock: Arc<dyn Clock>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Result<Self, AppError> {
        let policy_store = PolicyStore::load(&config.policy.file)?;
        let policy_enforcer = Arc::new(PolicyEnforcer::new(policy_store));

        Self::assemble(config, db_pool, clock, password_hasher, policy_enforcer)
    }

    /// Variant used by tests that construct the policy table in memory.
    pub fn build_with_policy(
        config: AppConfig,
        db_pool: PgPool,
        clock: Arc<dyn Clock>,
        password_hasher: Arc<dyn PasswordHasher>,
        policy_store: PolicyStore,
    ) -> Result<Self, AppError> {
        let policy_enforcer = Arc::new(PolicyEnforcer::new(policy_store));
        Self::assemble(config, db_pool, clock, password_hasher, policy_enforcer)
    }

    fn assemble(
        config: AppConfig,
        db_pool: PgPool,
        clock: Arc<dyn Clock>,
        password_hasher: Arc<dyn PasswordHasher>,
        policy_enforcer: Arc<PolicyEnforcer>,
    ) -> Result<Self, AppError> {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth, Arc::clone(&clock))?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, Arc::clone(&clock))?);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let article_repo = Arc::new(ArticleRepository::new(db_pool.clone()));
        let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
        let exercise_repo = Arc::new(ExerciseRepository::new(db_pool.clone()));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&jwt_encoder),
            Arc::clone(&clock),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&clock),
        ));
        let user_admin_service = Arc::new(UserAdminService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let article_service = Arc::new(ArticleService::new(
            Arc::clone(&article_repo),
            Arc::clone(&category_repo),
        ));
        let category_service = Arc::new(CategoryService::new(Arc::clone(&category_repo)));
        let exercise_service = Arc::new(ExerciseService::new(Arc::clone(&exercise_repo)));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            clock,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            policy_enforcer,
            user_repo,
            auth_service,
            user_service,
            user_admin_service,
            article_service,
            category_service,
            exercise_service,
        })
    }
}
