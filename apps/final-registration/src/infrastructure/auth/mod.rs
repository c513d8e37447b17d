//! Auth Adapters
//!
//! Resolves the user behind a session. Login itself is owned by the
//! surrounding site; this service only reads the result.

pub mod directory;

pub use directory::{DirectoryError, InMemoryAuthProvider, UserRecord};
