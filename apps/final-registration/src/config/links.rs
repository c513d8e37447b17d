//! Links to pages outside this service.

use serde::{Deserialize, Serialize};

use crate::application::ports::SiteLinks;

/// External page URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Login form.
    #[serde(default = "default_login")]
    pub login: String,
    /// Pre-registration form.
    #[serde(default = "default_pre_registration")]
    pub pre_registration: String,
    /// Final registration wizard.
    #[serde(default = "default_final_registration")]
    pub final_registration: String,
    /// Bank transfer information page.
    #[serde(default = "default_bank_transfer")]
    pub bank_transfer: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            login: default_login(),
            pre_registration: default_pre_registration(),
            final_registration: default_final_registration(),
            bank_transfer: default_bank_transfer(),
        }
    }
}

impl LinksConfig {
    /// All links with their config keys.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("links.login", &self.login),
            ("links.pre_registration", &self.pre_registration),
            ("links.final_registration", &self.final_registration),
            ("links.bank_transfer", &self.bank_transfer),
        ]
    }
}

impl From<&LinksConfig> for SiteLinks {
    fn from(config: &LinksConfig) -> Self {
        Self {
            login: config.login.clone(),
            pre_registration: config.pre_registration.clone(),
            final_registration: config.final_registration.clone(),
            bank_transfer: config.bank_transfer.clone(),
        }
    }
}

fn default_login() -> String {
    "http://localhost:8080/conference/user/login".to_string()
}

fn default_pre_registration() -> String {
    "http://localhost:8080/conference/pre-registration".to_string()
}

fn default_final_registration() -> String {
    "http://localhost:8080/final-registration".to_string()
}

fn default_bank_transfer() -> String {
    "http://localhost:8080/conference/final-registration/bank-transfer".to_string()
}
