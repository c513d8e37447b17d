//! Fee State Port (Driven Port)

use async_trait::async_trait;

use crate::domain::participant::FeeAmount;

/// Port for the fee set charged per accompanying person.
#[async_trait]
pub trait FeeStatePort: Send + Sync {
    /// Fee amounts for accompanying persons, `None` if no fee state is configured.
    async fn accompanying_person_fee_amounts(&self) -> Option<Vec<FeeAmount>>;
}
