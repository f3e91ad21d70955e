//! Open Trivia DB adapter. Implements QuestionProvider over HTTP.

pub mod client;
pub mod mapper;

pub use client::OpenTdbProvider;
