//! Domain entities. Pure data structures for the quiz session.
//!
//! No HTTP/terminal types here; adapters map into these.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported trivia categories. Each maps to an Open Trivia DB category id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    GeneralKnowledge,
    Sports,
    History,
    ScienceAndNature,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::GeneralKnowledge,
        Category::Sports,
        Category::History,
        Category::ScienceAndNature,
    ];

    /// Provider category id.
    pub fn id(self) -> u32 {
        match self {
            Category::GeneralKnowledge => 9,
            Category::Sports => 21,
            Category::History => 23,
            Category::ScienceAndNature => 17,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::GeneralKnowledge => "General Knowledge",
            Category::Sports => "Sports",
            Category::History => "History",
            Category::ScienceAndNature => "Science & Nature",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Accepts either the provider id (`"9"`) or the display name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(id) = value.parse::<u32>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Names a SessionForm field for `QuizSession::update_profile_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    PlayerName,
    Category,
    Difficulty,
}

/// Player profile collected before the quiz starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub player_name: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}

impl SessionForm {
    /// True when every field holds a value. A whitespace-only name counts as empty.
    pub fn is_complete(&self) -> bool {
        !self.player_name.trim().is_empty() && self.category.is_some() && self.difficulty.is_some()
    }
}

/// Question request parameters sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub amount: u8,
    pub category: Category,
    pub difficulty: Difficulty,
    pub kind: QuestionKind,
}

impl QuestionQuery {
    /// One multiple-choice question for the given category and difficulty.
    pub fn single(category: Category, difficulty: Difficulty) -> Self {
        Self {
            amount: 1,
            category,
            difficulty,
            kind: QuestionKind::Multiple,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Multiple => "multiple",
            QuestionKind::Boolean => "boolean",
        }
    }
}

/// Question as returned by the provider, before answer choices are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuestion {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    /// Provider's category label (e.g. "General Knowledge"); display only.
    pub category_label: String,
    pub difficulty: Option<Difficulty>,
}

/// A presented question. `text` and the answers may contain HTML entities/markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub answer_choices: Vec<String>,
    pub category_label: String,
    pub difficulty: Option<Difficulty>,
}

impl Question {
    /// Combines incorrect answers with the correct one and shuffles them.
    pub fn from_provider<R: Rng + ?Sized>(raw: ProviderQuestion, rng: &mut R) -> Self {
        let mut answer_choices = raw.incorrect_answers;
        answer_choices.push(raw.correct_answer.clone());
        answer_choices.shuffle(rng);
        Self {
            text: raw.text,
            correct_answer: raw.correct_answer,
            answer_choices,
            category_label: raw.category_label,
            difficulty: raw.difficulty,
        }
    }
}

/// Result of scoring the submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeResult {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// Visible phase of the session. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    CollectingProfile,
    QuestionPresented,
    AnswerEvaluated,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::CollectingProfile => "collecting-profile",
            Phase::QuestionPresented => "question-presented",
            Phase::AnswerEvaluated => "answer-evaluated",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_by_id_and_name() {
        assert_eq!(Category::parse("9"), Some(Category::GeneralKnowledge));
        assert_eq!(Category::parse("17"), Some(Category::ScienceAndNature));
        assert_eq!(Category::parse("science & nature"), Some(Category::ScienceAndNature));
        assert_eq!(Category::parse("42"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_form_completeness() {
        let mut form = SessionForm {
            player_name: "Ava".into(),
            category: Some(Category::History),
            difficulty: Some(Difficulty::Easy),
        };
        assert!(form.is_complete());
        form.player_name = "   ".into();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_question_choices_are_permutation() {
        let raw = ProviderQuestion {
            text: "Capital of France?".into(),
            correct_answer: "Paris".into(),
            incorrect_answers: vec!["Berlin".into(), "Rome".into(), "Madrid".into()],
            category_label: "Geography".into(),
            difficulty: Some(Difficulty::Easy),
        };
        let q = Question::from_provider(raw, &mut rand::thread_rng());
        let mut choices = q.answer_choices.clone();
        choices.sort();
        assert_eq!(choices, vec!["Berlin", "Madrid", "Paris", "Rome"]);
        assert_eq!(q.correct_answer, "Paris");
    }
}
