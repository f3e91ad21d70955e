//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the quiz session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive quiz loop until the player quits.
    async fn run(&self) -> Result<(), DomainError>;
}
