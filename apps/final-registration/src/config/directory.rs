//! Participant directory configuration.

use serde::{Deserialize, Serialize};

/// Where the in-memory auth adapter loads its sessions from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Path of a YAML file mapping sessions to users. Empty directory when absent.
    #[serde(default)]
    pub path: Option<String>,
}
