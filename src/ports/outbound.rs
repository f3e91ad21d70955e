//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ProviderQuestion, QuestionQuery};

/// Trivia question source (e.g. Open Trivia DB).
#[async_trait::async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Fetch exactly one question matching `query`.
    ///
    /// # Errors
    /// Returns `DomainError::Provider` on transport failure, a non-success
    /// response, or a body that does not decode into a question.
    async fn fetch_question(&self, query: &QuestionQuery) -> Result<ProviderQuestion, DomainError>;
}
