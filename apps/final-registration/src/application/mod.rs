//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for interacting with external systems
//! - **Services**: Payment status resolution shared by several use cases
//! - **Stages**: Handlers for the two wizard stages
//! - **Use Cases**: Eligibility gate, wizard controller, dashboard payment line
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod ports;
pub mod services;
pub mod stages;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use services::*;
pub use stages::*;
pub use use_cases::*;
