//! Infrastructure adapters. Implement ports.
//!
//! Open Trivia DB over HTTP, an offline provider, the terminal UI.
//! Map errors to DomainError.

pub mod mock_provider;
pub mod opentdb;
pub mod ui;
