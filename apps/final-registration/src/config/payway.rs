//! PayWay order service configuration.

use serde::{Deserialize, Serialize};

/// PayWay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayWayConfig {
    /// Base URL of the order API (e.g. `https://payway.example.org/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for PayWayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8081/api".to_string()
}

const fn default_timeout_ms() -> u64 {
    5000
}
