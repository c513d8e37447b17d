//! Persistence Adapters
//!
//! Session-scoped storage for wizard state.

pub mod in_memory;

pub use in_memory::InMemoryWizardSessionStore;
