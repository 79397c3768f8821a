//! Account lifecycle state, derived from the soft-delete timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three-way lifecycle classification of an account.
///
/// The state is never stored; it is computed from `disabled_at` and
/// `deleted_at`. A set `deleted_at` wins over `disabled_at`, so an account
/// disabled first and deleted later still classifies as deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Neither timestamp set; the account can authenticate.
    Active,
    /// `disabled_at` set, `deleted_at` unset; reversible.
    Disabled,
    /// `deleted_at` set; terminal.
    Deleted,
}

impl LifecycleState {
    /// Derive the state from the two timestamp fields.
    pub fn classify(
        disabled_at: Option<DateTime<Utc>>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        if deleted_at.is_some() {
            Self::Deleted
        } else if disabled_at.is_some() {
            Self::Disabled
        } else {
            Self::Active
        }
    }

    /// Return the state as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = cesizen_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            "deleted" => Ok(Self::Deleted),
            _ => Err(cesizen_core::AppError::validation(format!(
                "Invalid account status: '{s}'. Expected one of: active, disabled, deleted"
            ))),
        }
    }
}
