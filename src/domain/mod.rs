//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    Category, Difficulty, OutcomeResult, Phase, ProfileField, ProviderQuestion, Question,
    QuestionKind, QuestionQuery, SessionForm,
};
pub use errors::DomainError;
