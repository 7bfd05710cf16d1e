//! Application state definitions

use super::forms::SuggestionForm;
use crate::suggestion::{FormOutcome, SuggestionOptions};
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The open form; `None` once it produced its outcome
    pub form: Option<SuggestionForm>,
    /// Terminal signal of the form, kept for the host after close
    pub outcome: Option<FormOutcome>,
    /// Status line feedback message
    pub status_message: Option<String>,
    /// Pending error messages, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(options: SuggestionOptions) -> Self {
        Self {
            form: Some(SuggestionForm::new(options)),
            outcome: None,
            status_message: None,
            errors: VecDeque::new(),
        }
    }

    /// Push an error message to the queue for display
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Drop the form and record how it ended
    pub fn close_form(&mut self, outcome: FormOutcome) {
        self.form = None;
        self.outcome = Some(outcome);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SuggestionOptions::default())
    }
}
