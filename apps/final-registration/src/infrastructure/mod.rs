//! Infrastructure Layer
//!
//! This module contains all adapters (implementations) for the ports defined
//! in the application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**: Implement ports for external systems
//!   - `payway/`: PayWay order service (lookups and order creation)
//!   - `auth/`: Session directory
//!   - `settings/`: Site settings and fee state from configuration
//!   - `persistence/`: Wizard session storage
//!
//! - **Driver Adapters (Inbound)**: Expose application to external world
//!   - `http/`: REST API controllers
//!
//! - **Wiring**
//!   - `config/`: Dependency injection container

pub mod auth;
pub mod config;
pub mod http;
pub mod payway;
pub mod persistence;
pub mod settings;
