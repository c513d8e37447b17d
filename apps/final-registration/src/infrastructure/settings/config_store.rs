//! Settings backed by the loaded configuration.

use async_trait::async_trait;

use crate::application::ports::{FeeStatePort, RegistrationSettings, SettingsPort, SiteLinks};
use crate::config::Config;
use crate::domain::eligibility::RegistrationDeadline;
use crate::domain::participant::FeeAmount;

/// Serves [`SettingsPort`] and [`FeeStatePort`] from a [`Config`] snapshot.
///
/// Settings are resolved once at construction; a restart picks up changes.
#[derive(Debug, Clone)]
pub struct ConfigSettingsStore {
    settings: RegistrationSettings,
    accompanying_fee_amounts: Option<Vec<FeeAmount>>,
}

impl ConfigSettingsStore {
    /// Build the store from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let conference = &config.conference;
        let raw_deadline = conference.final_registration_deadline.as_deref();
        let deadline = RegistrationDeadline::parse(raw_deadline);

        if let Some(raw) = raw_deadline
            && deadline.last_date().is_none()
        {
            tracing::warn!(
                deadline = raw,
                "Unparseable final registration deadline, registration stays closed"
            );
        }

        Self {
            settings: RegistrationSettings {
                conference_name: conference.name.clone(),
                support_email: conference.support_email.clone(),
                deadline,
                accompanying_persons_enabled: conference.accompanying_persons_enabled,
                final_registration_enabled: conference.final_registration_enabled,
                links: SiteLinks::from(&config.links),
            },
            accompanying_fee_amounts: conference.accompanying_person_fee_amounts.clone(),
        }
    }
}

#[async_trait]
impl SettingsPort for ConfigSettingsStore {
    async fn registration_settings(&self) -> RegistrationSettings {
        self.settings.clone()
    }
}

#[async_trait]
impl FeeStatePort for ConfigSettingsStore {
    async fn accompanying_person_fee_amounts(&self) -> Option<Vec<FeeAmount>> {
        self.accompanying_fee_amounts.clone()
    }
}
