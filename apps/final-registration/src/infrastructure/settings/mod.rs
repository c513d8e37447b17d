//! Settings Adapters
//!
//! Site settings and fee state read from the service configuration.

pub mod config_store;

pub use config_store::ConfigSettingsStore;
