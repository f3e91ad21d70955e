//! Map Open Trivia DB JSON to domain entities.
//!
//! Extracts the single `ProviderQuestion` from an `api.php` response body.

use crate::domain::{Difficulty, DomainError, ProviderQuestion, QuestionKind};
use serde::Deserialize;

/// Top-level `api.php` response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ApiQuestion {
    #[serde(rename = "type", default)]
    pub kind: Option<QuestionKind>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// Describe a non-zero `response_code`.
///
/// * 1 → no results for the query
/// * 2 → invalid parameter
/// * 3 / 4 → session token problems
/// * 5 → rate limited
pub fn response_code_message(code: u8) -> String {
    match code {
        1 => "no results: not enough questions for this category/difficulty".to_string(),
        2 => "invalid parameter in request".to_string(),
        3 => "session token not found".to_string(),
        4 => "session token exhausted".to_string(),
        5 => "rate limited; wait a few seconds before retrying".to_string(),
        other => format!("unexpected response code {}", other),
    }
}

/// Decode a response body and return its first question.
pub fn question_from_body(body: &str) -> Result<ProviderQuestion, DomainError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Provider(format!("Failed to parse response: {}", e)))?;
    question_from_response(response)
}

pub fn question_from_response(response: ApiResponse) -> Result<ProviderQuestion, DomainError> {
    if response.response_code != 0 {
        return Err(DomainError::Provider(response_code_message(
            response.response_code,
        )));
    }
    let first = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::Provider("response contained no questions".to_string()))?;
    if first.kind == Some(QuestionKind::Boolean) {
        return Err(DomainError::Provider(
            "expected a multiple-choice question, got true/false".to_string(),
        ));
    }
    Ok(question_to_domain(first))
}

/// Map one API question. An unrecognised difficulty is kept as `None`.
pub fn question_to_domain(q: ApiQuestion) -> ProviderQuestion {
    ProviderQuestion {
        text: q.question,
        correct_answer: q.correct_answer,
        incorrect_answers: q.incorrect_answers,
        category_label: q.category,
        difficulty: q.difficulty.parse::<Difficulty>().ok(),
    }
}
