//! Policy enforcement — decides allow/deny per (role, path, verb).

use cesizen_core::error::AppError;
use cesizen_entity::user::Role;

use super::rule::normalize_path;
use super::store::PolicyStore;

/// Enforces the loaded policy table.
///
/// Enforcement is deterministic and side-effect-free; every syntactically
/// valid input gets an answer, and inputs with no matching rule are denied.
#[derive(Debug, Clone)]
pub struct PolicyEnforcer {
    /// The policy table.
    store: PolicyStore,
}

impl PolicyEnforcer {
    /// Creates a new enforcer over a loaded store.
    pub fn new(store: PolicyStore) -> Self {
        Self { store }
    }

    /// Returns whether `role` may invoke `verb` on `path`.
    ///
    /// The path is normalized (trailing slash stripped) and the verb
    /// upper-cased before lookup.
    pub fn enforce(&self, role: Role, path: &str, verb: &str) -> bool {
        self.store.grants(role, normalize_path(path), verb)
    }

    /// Checks the policy and returns a denial error when it does not pass.
    ///
    /// The error carries the generic "insufficient role" message; it never
    /// reveals which rule would have allowed the request.
    pub fn require(&self, role: Role, path: &str, verb: &str) -> Result<(), AppError> {
        if self.enforce(role, path, verb) {
            Ok(())
        } else {
            Err(AppError::policy_denied())
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &PolicyStore {
        &self.store
    }
}
