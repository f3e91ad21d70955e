//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use crate::domain::Phase;
use thiserror::Error;

/// User-facing message for a profile with missing fields.
pub const MSG_FIELDS_REQUIRED: &str = "All fields are required.";
/// User-facing message when no answer was selected.
pub const MSG_SELECT_ANSWER: &str = "Please select an answer.";
/// User-facing message when the provider call fails.
pub const MSG_FETCH_FAILED: &str = "Failed to fetch question. Try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing required input. State is unchanged; the user may retry.
    #[error("{0}")]
    Validation(String),

    /// Question could not be fetched. The profile is preserved.
    #[error("{0}")]
    Fetch(String),

    /// Cause reported by a question provider adapter.
    #[error("Question provider error: {0}")]
    Provider(String),

    #[error("`{operation}` is not allowed while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("a question request is already in flight")]
    RequestInFlight,

    #[error("`{0}` is not one of the answer choices")]
    UnknownChoice(String),

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    /// True for errors that replace the session's user-visible message.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, DomainError::Validation(_) | DomainError::Fetch(_))
    }
}
