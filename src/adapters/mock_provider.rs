//! Offline question provider. No network calls.
//!
//! Serves one built-in question per category for offline play and testing.
//! Simulates network latency with a configurable delay.

use crate::domain::{Category, DomainError, ProviderQuestion, QuestionQuery};
use crate::ports::QuestionProvider;
use crate::shared::config::DEFAULT_OFFLINE_DELAY_MS;
use std::time::Duration;
use tracing::info;

/// Built-in question provider.
pub struct MockQuestionProvider {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockQuestionProvider {
    /// Create a provider with the configured default delay.
    pub fn new() -> Self {
        Self {
            delay_ms: DEFAULT_OFFLINE_DELAY_MS,
        }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    fn question_for(category: Category) -> (&'static str, &'static str, [&'static str; 3]) {
        match category {
            Category::GeneralKnowledge => (
                "What is the capital of France?",
                "Paris",
                ["Berlin", "Rome", "Madrid"],
            ),
            Category::Sports => (
                "How many players does a football (soccer) team field at once?",
                "11",
                ["9", "10", "12"],
            ),
            Category::History => (
                "In which year did the Berlin Wall fall?",
                "1989",
                ["1987", "1991", "1985"],
            ),
            Category::ScienceAndNature => (
                "What is the chemical symbol for gold?",
                "Au",
                ["Ag", "Gd", "Go"],
            ),
        }
    }
}

impl Default for MockQuestionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl QuestionProvider for MockQuestionProvider {
    async fn fetch_question(&self, query: &QuestionQuery) -> Result<ProviderQuestion, DomainError> {
        info!(
            category = query.category.id(),
            difficulty = %query.difficulty,
            "[OFFLINE] serving built-in question"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let (text, correct, incorrect) = Self::question_for(query.category);
        Ok(ProviderQuestion {
            text: text.to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
            category_label: query.category.name().to_string(),
            difficulty: Some(query.difficulty),
        })
    }
}
