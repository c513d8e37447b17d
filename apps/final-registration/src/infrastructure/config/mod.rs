//! Application wiring.

pub mod container;

pub use container::{Container, ContainerError, ProductionContainer};
