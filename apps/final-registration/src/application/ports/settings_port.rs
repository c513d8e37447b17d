//! Settings Port (Driven Port)
//!
//! Site-wide settings that drive final registration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::eligibility::RegistrationDeadline;

/// URLs of pages outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLinks {
    /// Login form.
    pub login: String,
    /// Pre-registration form.
    pub pre_registration: String,
    /// Final registration wizard.
    pub final_registration: String,
    /// Bank transfer information page.
    pub bank_transfer: String,
}

/// Snapshot of the settings for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSettings {
    /// Conference name and year, e.g. "ESSHC 2026".
    pub conference_name: String,
    /// Secretariat e-mail address.
    pub support_email: String,
    /// Last day of final registration.
    pub deadline: RegistrationDeadline,
    /// Whether accompanying persons may be registered.
    pub accompanying_persons_enabled: bool,
    /// Whether the final registration and payment module is switched on.
    pub final_registration_enabled: bool,
    /// External page links.
    pub links: SiteLinks,
}

/// Port for reading site settings.
#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// Current settings.
    async fn registration_settings(&self) -> RegistrationSettings;
}
