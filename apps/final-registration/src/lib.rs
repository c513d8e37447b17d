// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Final Registration - Rust Core Library
//!
//! Paid final registration for conference participants.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `participant`: Participant, fee amounts, registration standing
//!   - `payment`: Order codes and the payment status table
//!   - `eligibility`: Deadline, gate outcome, user messages
//!   - `wizard`: Stages, actions, selection rules, routing
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`PaymentGatewayPort`, `AuthPort`, ...)
//!   - `services`: `PaymentStatusResolver`
//!   - `stages`: Main and overview stage handlers
//!   - `use_cases`: `EligibilityGate`, `WizardController`, `PaymentStatusSummaryUseCase`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `payway`: PayWay order service client
//!   - `auth`, `settings`, `persistence`: In-process adapters
//!   - `http`: Axum router
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// HTTP error codes and bodies.
pub mod error;

/// Prometheus metrics.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::eligibility::{Admission, BlockReason, EligibilityOutcome, RegistrationDeadline};
pub use domain::participant::{FeeAmount, Participant, RegistrationStatus};
pub use domain::payment::{Order, PayedStatus, PaymentMethod, PaymentStatusTable};
pub use domain::shared::{FeeAmountId, Money, OrderId, ParticipantId, SessionId};
pub use domain::wizard::{WizardAction, WizardSession, WizardStage, WizardStateMachine};

// Application re-exports
pub use application::ports::{
    AuthPort, FeeStatePort, PaymentGatewayPort, RegistrationCommitPort, SettingsPort,
};
pub use application::services::PaymentStatusResolver;
pub use application::use_cases::{EligibilityGate, PaymentStatusSummaryUseCase, WizardController};

// Infrastructure re-exports
pub use infrastructure::config::{Container, ProductionContainer};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::payway::{PayWayClient, PayWayError};
