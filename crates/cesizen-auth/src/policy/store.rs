//! Policy table loading and indexing.

use std::collections::HashMap;

use serde::Deserialize;

use cesizen_core::error::AppError;
use cesizen_entity::user::Role;

use super::rule::{PathPattern, PolicyRule};

/// Deserialization target for the policy TOML file.
#[derive(Debug, Deserialize)]
struct PolicyFile {
    rules: Vec<PolicyRule>,
}

/// The loaded, immutable policy table.
///
/// Rules are indexed by `(role, verb)` at load time; after construction the
/// store is read-only and safe to share across request tasks without
/// locking.
#[derive(Debug, Clone)]
pub struct PolicyStore {
    index: HashMap<(Role, String), Vec<PathPattern>>,
    rule_count: usize,
}

impl PolicyStore {
    /// Build a store from an explicit rule list.
    pub fn from_rules(rules: Vec<PolicyRule>) -> Self {
        let rule_count = rules.len();
        let mut index: HashMap<(Role, String), Vec<PathPattern>> = HashMap::new();
        for rule in rules {
            index
                .entry((rule.role, rule.verb.to_uppercase()))
                .or_default()
                .push(PathPattern::parse(&rule.path));
        }
        Self { index, rule_count }
    }

    /// Load the policy table from a TOML file.
    ///
    /// A missing or malformed file is a startup failure; policy changes
    /// require a restart.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let file: PolicyFile = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to read policy table '{path}': {e}"))
            })?
            .try_deserialize()
            .map_err(|e| {
                AppError::configuration(format!("Failed to parse policy table '{path}': {e}"))
            })?;

        tracing::info!(rules = file.rules.len(), path, "Loaded policy table");
        Ok(Self::from_rules(file.rules))
    }

    /// Number of rules loaded.
    pub fn len(&self) -> usize {
        self.rule_count
    }

    /// Whether the table holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Whether some rule grants `verb` on `path` (already normalized) to
    /// `role`.
    pub(crate) fn grants(&self, role: Role, path: &str, verb: &str) -> bool {
        self.index
            .get(&(role, verb.to_uppercase()))
            .is_some_and(|patterns| patterns.iter().any(|p| p.matches(path)))
    }
}
