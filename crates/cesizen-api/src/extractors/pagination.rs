//! Admin listing query parameters.

use serde::Deserialize;

use cesizen_core::error::AppError;
use cesizen_core::types::pagination::PageRequest;
use cesizen_entity::user::{LifecycleState, Role};

/// Query parameters of the admin user listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminListParams {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size.
    #[serde(default = "default_size")]
    pub size: i64,
    /// Optional lifecycle-state filter (`active`, `disabled`, `deleted`).
    pub status: Option<String>,
    /// Optional role filter.
    pub role: Option<Role>,
}

impl AdminListParams {
    /// Convert to a `PageRequest`, rejecting non-positive page or size.
    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        if self.page < 1 {
            return Err(AppError::validation("Page number must be positive"));
        }
        if self.size < 1 {
            return Err(AppError::validation("Page size must be positive"));
        }
        Ok(PageRequest::new(self.page as u64, self.size as u64))
    }

    /// Parse the status filter, if present.
    pub fn status_filter(&self) -> Result<Option<LifecycleState>, AppError> {
        self.status.as_deref().map(str::parse).transpose()
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}
