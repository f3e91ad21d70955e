//! Application use cases. Orchestrate domain logic via ports.

pub mod quiz_session;

pub use quiz_session::{QuizSession, SessionView};
