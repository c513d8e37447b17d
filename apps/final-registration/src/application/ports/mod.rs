//! Application Ports (Driven)
//!
//! Interfaces through which the application reaches external systems:
//! the payment service, the login session, site settings and the
//! registration backend.

mod auth_port;
mod fee_state_port;
mod payment_gateway_port;
mod registration_commit_port;
mod settings_port;

pub use auth_port::{AuthPort, AuthState};
pub use fee_state_port::FeeStatePort;
#[cfg(test)]
pub use payment_gateway_port::MockPaymentGatewayPort;
pub use payment_gateway_port::PaymentGatewayPort;
pub use registration_commit_port::{CommitError, CommitReceipt, CommitRequest, RegistrationCommitPort};
pub use settings_port::{RegistrationSettings, SettingsPort, SiteLinks};
