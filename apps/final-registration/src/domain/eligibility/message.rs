//! User-facing messages.

use serde::{Deserialize, Serialize};

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Informational.
    Info,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

/// A hyperlink embedded in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLink {
    /// Link text.
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl MessageLink {
    /// Create a link.
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// A `mailto:` link showing the address itself.
    #[must_use]
    pub fn mailto(email: &str) -> Self {
        Self::new(email, format!("mailto:{email}"))
    }
}

/// A message with optional links, rendered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    /// Severity.
    pub severity: Severity,
    /// Plain text of the message.
    pub text: String,
    /// Links referenced by the text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<MessageLink>,
}

impl UserMessage {
    /// Create a message without links.
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            links: Vec::new(),
        }
    }

    /// Attach a link.
    #[must_use]
    pub fn with_link(mut self, link: MessageLink) -> Self {
        self.links.push(link);
        self
    }
}
