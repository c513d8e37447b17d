//! Wizard errors.

use thiserror::Error;

/// Errors raised while driving the wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The request named an action the wizard does not know.
    #[error("unrecognized wizard action: {action}")]
    InvalidAction {
        /// The raw action identifier.
        action: String,
    },

    /// Loading or saving the wizard session failed.
    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),
}

/// Errors from the wizard session store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionStoreError {
    /// The store could not be reached or is in an inconsistent state.
    #[error("wizard session store unavailable: {0}")]
    Unavailable(String),
}
