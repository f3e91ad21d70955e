//! Quiz session controller: profile -> question -> outcome -> restart.
//!
//! - Owns all session data; the view reads it through getters / `snapshot()`
//! - `start_quiz` is the only operation with an external effect (one provider call)
//! - Single-flight: a second `start_quiz` while one is outstanding is rejected
//! - The state lock is never held across `.await`

use crate::domain::errors::{MSG_FETCH_FAILED, MSG_FIELDS_REQUIRED, MSG_SELECT_ANSWER};
use crate::domain::{
    Category, Difficulty, DomainError, OutcomeResult, Phase, ProfileField, Question,
    QuestionQuery, SessionForm,
};
use crate::ports::QuestionProvider;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct SessionState {
    phase: Phase,
    form: SessionForm,
    question: Option<Question>,
    selected_answer: Option<String>,
    outcome: Option<OutcomeResult>,
    error_message: Option<String>,
    in_flight: bool,
    /// Bumped on restart so a late provider response is discarded.
    generation: u64,
}

impl SessionState {
    fn require(&self, operation: &'static str, phase: Phase) -> Result<(), DomainError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(DomainError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Store the error's message for display and hand the error back.
    fn fail(&mut self, err: DomainError) -> DomainError {
        self.error_message = Some(err.to_string());
        err
    }
}

/// Consistent copy of the session for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub phase: Phase,
    pub form: SessionForm,
    pub question: Option<Question>,
    pub selected_answer: Option<String>,
    pub outcome: Option<OutcomeResult>,
    pub error_message: Option<String>,
    pub loading: bool,
}

/// Quiz session controller. One instance per player session.
pub struct QuizSession {
    provider: Arc<dyn QuestionProvider>,
    state: Mutex<SessionState>,
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the in-flight mark if `start_quiz` is dropped before the provider answers.
struct InFlightGuard<'a> {
    state: &'a Mutex<SessionState>,
    generation: u64,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut st = lock(self.state);
        if st.generation == self.generation {
            st.in_flight = false;
            debug!("question request cancelled");
        }
    }
}

impl QuizSession {
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            provider,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        lock(&self.state)
    }

    /// Set one profile field. No validation here: a value that names no known
    /// category/difficulty leaves that field empty.
    pub fn update_profile_field(&self, field: ProfileField, value: &str) -> Result<(), DomainError> {
        let mut st = self.state();
        st.require("update_profile_field", Phase::CollectingProfile)?;
        match field {
            ProfileField::PlayerName => st.form.player_name = value.to_string(),
            ProfileField::Category => st.form.category = Category::parse(value),
            ProfileField::Difficulty => st.form.difficulty = value.parse::<Difficulty>().ok(),
        }
        Ok(())
    }

    /// Validate the profile and fetch one question from the provider.
    ///
    /// On failure the profile is kept and the error message is set. If
    /// `restart` runs while the request is outstanding, the response is
    /// discarded and this returns `Ok(())` with the session left reset.
    pub async fn start_quiz(&self) -> Result<(), DomainError> {
        let (query, generation) = {
            let mut st = self.state();
            st.require("start_quiz", Phase::CollectingProfile)?;
            if st.in_flight {
                return Err(DomainError::RequestInFlight);
            }
            st.error_message = None;
            let (Some(category), Some(difficulty)) = (st.form.category, st.form.difficulty) else {
                return Err(st.fail(DomainError::Validation(MSG_FIELDS_REQUIRED.into())));
            };
            if !st.form.is_complete() {
                return Err(st.fail(DomainError::Validation(MSG_FIELDS_REQUIRED.into())));
            }
            st.in_flight = true;
            (QuestionQuery::single(category, difficulty), st.generation)
        };

        let mut guard = InFlightGuard {
            state: &self.state,
            generation,
            armed: true,
        };
        info!(
            category = query.category.id(),
            difficulty = %query.difficulty,
            "requesting question"
        );
        let fetched = self.provider.fetch_question(&query).await;
        guard.armed = false;

        let mut st = self.state();
        if st.generation != generation {
            debug!("session restarted while fetching; discarding response");
            return Ok(());
        }
        st.in_flight = false;
        match fetched {
            Ok(raw) => {
                let question = Question::from_provider(raw, &mut rand::thread_rng());
                info!(
                    choices = question.answer_choices.len(),
                    "question presented"
                );
                st.question = Some(question);
                st.selected_answer = None;
                st.phase = Phase::QuestionPresented;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "question fetch failed");
                Err(st.fail(DomainError::Fetch(MSG_FETCH_FAILED.into())))
            }
        }
    }

    /// Record the player's choice. Must be one of the presented answers.
    pub fn select_answer(&self, choice: &str) -> Result<(), DomainError> {
        let mut st = self.state();
        st.require("select_answer", Phase::QuestionPresented)?;
        let known = st
            .question
            .as_ref()
            .is_some_and(|q| q.answer_choices.iter().any(|c| c == choice));
        if !known {
            return Err(DomainError::UnknownChoice(choice.to_string()));
        }
        st.selected_answer = Some(choice.to_string());
        Ok(())
    }

    /// Score the selected answer by exact string equality.
    pub fn submit_answer(&self) -> Result<OutcomeResult, DomainError> {
        let mut st = self.state();
        st.require("submit_answer", Phase::QuestionPresented)?;
        st.error_message = None;
        let Some(selected) = st.selected_answer.clone() else {
            return Err(st.fail(DomainError::Validation(MSG_SELECT_ANSWER.into())));
        };
        let correct_answer = st
            .question
            .as_ref()
            .map(|q| q.correct_answer.clone())
            .unwrap_or_default();
        let outcome = OutcomeResult {
            is_correct: selected == correct_answer,
            correct_answer,
        };
        info!(is_correct = outcome.is_correct, "answer evaluated");
        st.outcome = Some(outcome.clone());
        st.phase = Phase::AnswerEvaluated;
        Ok(outcome)
    }

    /// Clear everything and return to profile entry. Allowed from any phase.
    pub fn restart(&self) {
        let mut st = self.state();
        let generation = st.generation.wrapping_add(1);
        *st = SessionState {
            generation,
            ..SessionState::default()
        };
        debug!("session restarted");
    }

    pub fn phase(&self) -> Phase {
        self.state().phase
    }

    pub fn form(&self) -> SessionForm {
        self.state().form.clone()
    }

    pub fn question(&self) -> Option<Question> {
        self.state().question.clone()
    }

    pub fn selected_answer(&self) -> Option<String> {
        self.state().selected_answer.clone()
    }

    pub fn outcome(&self) -> Option<OutcomeResult> {
        self.state().outcome.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state().error_message.clone()
    }

    /// True while a question request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state().in_flight
    }

    pub fn snapshot(&self) -> SessionView {
        let st = self.state();
        SessionView {
            phase: st.phase,
            form: st.form.clone(),
            question: st.question.clone(),
            selected_answer: st.selected_answer.clone(),
            outcome: st.outcome.clone(),
            error_message: st.error_message.clone(),
            loading: st.in_flight,
        }
    }
}
