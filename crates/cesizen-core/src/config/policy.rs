//! Authorization policy configuration.

use serde::{Deserialize, Serialize};

/// Policy table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Path to the TOML file holding the `[[rules]]` table.
    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

fn default_file() -> String {
    "config/policy.toml".to_string()
}
