//! Implements InputPort. Inquire-based interactive prompts.
//!
//! One loop iteration per phase: profile form, question, outcome.

use crate::adapters::ui::markup;
use crate::domain::{Category, Difficulty, DomainError, OutcomeResult, Phase, ProfileField};
use crate::ports::InputPort;
use crate::usecases::QuizSession;
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Sets the global inquire render config used by every prompt.
pub fn apply_theme() {
    let theme = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightYellow))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightMagenta))
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightMagenta)))
        .with_help_message(StyleSheet::new().with_fg(Color::DarkGrey));
    inquire::set_global_render_config(theme);
}

/// Greeting shown after the answer is scored.
pub fn outcome_headline(player_name: &str, outcome: &OutcomeResult) -> String {
    if outcome.is_correct {
        format!("Well done, {}!", player_name)
    } else {
        format!("Nice job, {}.", player_name)
    }
}

/// Answer choice as shown in the select list; keeps the index of the raw choice.
struct ChoiceOption {
    index: usize,
    label: String,
}

impl fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

/// Ctrl-C ends the session; every other prompt failure is an error.
fn is_interrupt(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationInterrupted)
}

fn print_error(message: Option<String>) {
    if let Some(msg) = message {
        println!("{}", msg.red());
    }
}

/// TUI adapter. Inquire prompts driving one `QuizSession`.
pub struct TuiInputPort {
    session: Arc<QuizSession>,
}

impl TuiInputPort {
    pub fn new(session: Arc<QuizSession>) -> Self {
        Self { session }
    }

    /// Profile form then start. Returns false when the player quits.
    async fn collect_profile(&self) -> Result<bool, DomainError> {
        print_error(self.session.error_message());
        let form = self.session.form();

        let name = match Text::new("First name:")
            .with_initial_value(&form.player_name)
            .prompt_skippable()
        {
            Ok(name) => name.unwrap_or_default(),
            Err(e) if is_interrupt(&e) => return Ok(false),
            Err(e) => return Err(ui_err(e)),
        };
        self.session
            .update_profile_field(ProfileField::PlayerName, &name)?;

        let cursor = form
            .category
            .and_then(|c| Category::ALL.iter().position(|x| *x == c))
            .unwrap_or(0);
        let category = match Select::new("Category:", Category::ALL.to_vec())
            .with_starting_cursor(cursor)
            .prompt_skippable()
        {
            Ok(c) => c,
            Err(e) if is_interrupt(&e) => return Ok(false),
            Err(e) => return Err(ui_err(e)),
        };
        let category_value = category.map(|c| c.id().to_string()).unwrap_or_default();
        self.session
            .update_profile_field(ProfileField::Category, &category_value)?;

        let cursor = form
            .difficulty
            .and_then(|d| Difficulty::ALL.iter().position(|x| *x == d))
            .unwrap_or(0);
        let difficulty = match Select::new("Difficulty:", Difficulty::ALL.to_vec())
            .with_starting_cursor(cursor)
            .prompt_skippable()
        {
            Ok(d) => d,
            Err(e) if is_interrupt(&e) => return Ok(false),
            Err(e) => return Err(ui_err(e)),
        };
        let difficulty_value = difficulty.map(|d| d.as_str()).unwrap_or_default();
        self.session
            .update_profile_field(ProfileField::Difficulty, difficulty_value)?;

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Fetching question...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        let started = self.session.start_quiz().await;
        spinner.finish_and_clear();

        match started {
            Ok(()) => Ok(true),
            // Shown at the top of the next form pass.
            Err(e) if e.is_user_visible() => Ok(true),
            Err(e) => {
                warn!(error = %e, "start rejected");
                Ok(true)
            }
        }
    }

    /// Present the question and submit the choice. Esc submits with nothing selected.
    fn ask_question(&self) -> Result<bool, DomainError> {
        let Some(question) = self.session.question() else {
            return Err(DomainError::InvalidPhase {
                operation: "ask_question",
                phase: self.session.phase(),
            });
        };

        let mut meta = question.category_label.clone();
        if let Some(d) = question.difficulty {
            meta.push_str(&format!(" · {}", d));
        }
        println!("\n{}", meta.dark_grey());
        print_error(self.session.error_message());

        let options: Vec<ChoiceOption> = question
            .answer_choices
            .iter()
            .enumerate()
            .map(|(index, raw)| ChoiceOption {
                index,
                label: markup::to_plain_text(raw),
            })
            .collect();
        let prompt = markup::to_plain_text(&question.text);
        let picked = match Select::new(&prompt, options)
            .with_help_message("↑↓ to move, enter to answer, esc to submit without an answer")
            .prompt_skippable()
        {
            Ok(p) => p,
            Err(e) if is_interrupt(&e) => return Ok(false),
            Err(e) => return Err(ui_err(e)),
        };

        if let Some(opt) = picked {
            self.session
                .select_answer(&question.answer_choices[opt.index])?;
        }
        match self.session.submit_answer() {
            Ok(_) => Ok(true),
            Err(e) if e.is_user_visible() => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Show the result and offer another round.
    fn show_outcome(&self) -> Result<bool, DomainError> {
        let Some(outcome) = self.session.outcome() else {
            return Err(DomainError::InvalidPhase {
                operation: "show_outcome",
                phase: self.session.phase(),
            });
        };
        let name = self.session.form().player_name;
        let headline = outcome_headline(&name, &outcome);
        if outcome.is_correct {
            println!("\n{}", headline.green().bold());
        } else {
            println!("\n{}", headline.yellow().bold());
            println!(
                "The correct answer was: {}",
                markup::to_plain_text(&outcome.correct_answer).bold()
            );
        }

        let again = match Confirm::new("Try another?").with_default(true).prompt_skippable() {
            Ok(a) => a.unwrap_or(false),
            Err(e) if is_interrupt(&e) => return Ok(false),
            Err(e) => return Err(ui_err(e)),
        };
        if again {
            self.session.restart();
            println!();
        }
        Ok(again)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let keep_going = match self.session.phase() {
                Phase::CollectingProfile => self.collect_profile().await?,
                Phase::QuestionPresented => self.ask_question()?,
                Phase::AnswerEvaluated => self.show_outcome()?,
            };
            if !keep_going {
                break;
            }
        }
        println!("{}", "Thanks for playing!".dark_grey());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_headline() {
        let right = OutcomeResult {
            is_correct: true,
            correct_answer: "4".into(),
        };
        let wrong = OutcomeResult {
            is_correct: false,
            correct_answer: "4".into(),
        };
        assert_eq!(outcome_headline("Ava", &right), "Well done, Ava!");
        assert_eq!(outcome_headline("Ava", &wrong), "Nice job, Ava.");
    }

    #[test]
    fn test_choice_option_displays_label() {
        let opt = ChoiceOption {
            index: 2,
            label: "Pokémon".into(),
        };
        assert_eq!(opt.to_string(), "Pokémon");
    }
}
