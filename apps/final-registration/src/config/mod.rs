//! Configuration module for the final registration service.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use final_registration::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod conference;
mod directory;
mod links;
mod observability;
mod payway;
mod server;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use conference::ConferenceConfig;
pub use directory::DirectoryConfig;
pub use links::LinksConfig;
pub use observability::{LoggingConfig, MetricsSettings, ObservabilityConfig};
pub use payway::PayWayConfig;
pub use server::ServerConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Conference settings.
    #[serde(default)]
    pub conference: ConferenceConfig,
    /// External page links.
    #[serde(default)]
    pub links: LinksConfig,
    /// PayWay order service.
    #[serde(default)]
    pub payway: PayWayConfig,
    /// Participant directory for the in-memory auth adapter.
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let email = config.conference.support_email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ConfigError::ValidationError(
            "conference.support_email must be an e-mail address".to_string(),
        ));
    }

    for (key, value) in config.links.entries() {
        require_absolute_url(key, value)?;
    }
    require_absolute_url("payway.base_url", &config.payway.base_url)?;

    if config.payway.timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "payway.timeout_ms must be positive".to_string(),
        ));
    }

    let metrics = &config.observability.metrics;
    if metrics.enabled && metrics.port == config.server.http_port {
        return Err(ConfigError::ValidationError(
            "observability.metrics.port and server.http_port must be different".to_string(),
        ));
    }

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}

fn require_absolute_url(key: &str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::ValidationError(format!(
            "{key} must be an absolute http(s) URL, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r"
conference:
  support_email: esshc@example.org
";

    #[test]
    fn test_load_minimal_config() {
        let config = match load_config_from_string(MINIMAL) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.server.http_port, 8080);
        assert!(config.conference.final_registration_enabled);
        assert!(!config.conference.accompanying_persons_enabled);
        assert!(config.conference.final_registration_deadline.is_none());
        assert_eq!(config.payway.timeout_ms, 5000);
        assert_eq!(config.observability.logging.format, "json");
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "email: ${FINAL_REGISTRATION_TEST_NONEXISTENT_VAR:-office@example.org}";
        assert_eq!(interpolate_env_vars(input), "email: office@example.org");
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "base_url: ${FINAL_REGISTRATION_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "base_url: ");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_uses_existing() {
        let result = interpolate_env_vars("path: ${PATH:-default}");
        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_validation_missing_support_email() {
        let Err(err) = load_config_from_string("server:\n  http_port: 8080\n") else {
            panic!("expected error for missing support email");
        };
        assert!(err.to_string().contains("support_email"));
    }

    #[test]
    fn test_validation_relative_link() {
        let yaml = r"
conference:
  support_email: esshc@example.org
links:
  login: /user/login
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for relative link");
        };
        assert!(err.to_string().contains("links.login"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let yaml = r"
conference:
  support_email: esshc@example.org
payway:
  timeout_ms: 0
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero timeout");
        };
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_validation_metrics_port_clash() {
        let yaml = r"
server:
  http_port: 9090
conference:
  support_email: esshc@example.org
observability:
  metrics:
    enabled: true
    port: 9090
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for port clash");
        };
        assert!(err.to_string().contains("must be different"));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
server:
  http_port: 8088
  bind_address: "127.0.0.1"

conference:
  name: "ESSHC 2026"
  support_email: "esshc@example.org"
  final_registration_deadline: "2026-06-30"
  accompanying_persons_enabled: true
  accompanying_person_fee_amounts:
    - id: 10
      description: "Accompanying person"
      amount: "45.00"

links:
  login: "https://esshc.example.org/user/login"
  pre_registration: "https://esshc.example.org/pre-registration"
  final_registration: "https://esshc.example.org/final-registration"
  bank_transfer: "https://esshc.example.org/final-registration/bank-transfer"

payway:
  base_url: "https://payway.example.org/api"
  timeout_ms: 2500

directory:
  path: "directory.yaml"

observability:
  logging:
    level: "debug"
    format: "pretty"
  metrics:
    enabled: true
    port: 9191
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.conference.name, "ESSHC 2026");
        assert_eq!(config.conference.final_registration_deadline.as_deref(), Some("2026-06-30"));
        let fees = config.conference.accompanying_person_fee_amounts.unwrap();
        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].amount.to_string(), "45.00 EUR");
        assert_eq!(config.payway.timeout_ms, 2500);
        assert_eq!(config.directory.path.as_deref(), Some("directory.yaml"));
        assert_eq!(config.observability.logging.format, "pretty");
        assert!(config.observability.metrics.enabled);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.conference.support_email, "esshc@example.org");
    }

    #[test]
    fn test_load_config_missing_file() {
        let Err(err) = load_config(Some("/nonexistent/final-registration.yaml")) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
