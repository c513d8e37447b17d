//! Conference settings that drive final registration.

use serde::{Deserialize, Serialize};

use crate::domain::participant::FeeAmount;

/// Conference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceConfig {
    /// Long name and year, e.g. "ESSHC 2026".
    #[serde(default = "default_name")]
    pub name: String,
    /// Secretariat e-mail address.
    #[serde(default)]
    pub support_email: String,
    /// Last day of final registration (`YYYY-MM-DD`). Closed when absent or unparseable.
    #[serde(default)]
    pub final_registration_deadline: Option<String>,
    /// Whether the final registration and payment module is switched on.
    #[serde(default = "default_true")]
    pub final_registration_enabled: bool,
    /// Whether accompanying persons may be registered.
    #[serde(default)]
    pub accompanying_persons_enabled: bool,
    /// Fee tiers per accompanying person. `None` means no fee state is configured.
    #[serde(default)]
    pub accompanying_person_fee_amounts: Option<Vec<FeeAmount>>,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            support_email: String::new(),
            final_registration_deadline: None,
            final_registration_enabled: true,
            accompanying_persons_enabled: false,
            accompanying_person_fee_amounts: None,
        }
    }
}

fn default_name() -> String {
    "the conference".to_string()
}

const fn default_true() -> bool {
    true
}
