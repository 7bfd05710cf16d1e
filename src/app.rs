//! Application state and core logic

use crate::config::SuggestionConfig;
use crate::state::{AppState, Form, FormButton, FormFocus};
use crate::suggestion::{
    FormError, FormOutcome, SuggestionMetadata, SuggestionOptions, SuggestionSink,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submitted suggestions go
    sink: Box<dyn SuggestionSink>,
    /// Identifier reported in metadata; crate name when unset
    app_identifier: Option<String>,
    /// Version reported in metadata; crate version when unset
    app_version: Option<String>,
    /// Id the sink recorded the suggestion under
    pub delivered: Option<Uuid>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &SuggestionConfig) -> Self {
        Self::with_sink(
            config.options(),
            config.app_identifier.clone(),
            config.app_version.clone(),
            Box::new(config.sink()),
        )
    }

    pub fn with_sink(
        options: SuggestionOptions,
        app_identifier: Option<String>,
        app_version: Option<String>,
        sink: Box<dyn SuggestionSink>,
    ) -> Self {
        Self {
            state: AppState::new(options),
            sink,
            app_identifier,
            app_version,
            delivered: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether suggestions can currently be sent
    pub fn can_send(&self) -> bool {
        self.sink.can_send()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            // Form already closed: leave once the last error is acknowledged
            if self.state.form.is_none() && !self.state.has_error() {
                self.quit = true;
            }
            return Ok(());
        }

        let Some(form) = self.state.form.as_mut() else {
            self.quit = true;
            return Ok(());
        };

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left | KeyCode::Right if form.is_buttons_row_active() => {
                if key.code == KeyCode::Left {
                    form.prev_button();
                } else {
                    form.next_button();
                }
            }
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_clipboard();
            }
            KeyCode::Esc => self.cancel(),
            KeyCode::Enter => match form.enter() {
                Some(FormButton::Submit) => self.submit().await,
                Some(FormButton::Cancel) => self.cancel(),
                None => {}
            },
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Submit the form and deliver the suggestion
    async fn submit(&mut self) {
        if !self.sink.can_send() {
            self.push_error("Suggestions cannot be sent: no output location is available");
            return;
        }
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        let metadata = SuggestionMetadata::collect(
            self.app_identifier.as_deref(),
            self.app_version.as_deref(),
        );
        let suggestion = match form.submit(metadata) {
            Ok(suggestion) => suggestion,
            Err(FormError::NotSubmittable) => {
                self.push_error("Please write a message before submitting.");
                return;
            }
            Err(err @ FormError::Closed) => {
                tracing::warn!("{err}");
                return;
            }
        };

        let result = self.sink.deliver(&suggestion).await;
        self.state.close_form(FormOutcome::Submitted(suggestion));
        match result {
            Ok(id) => {
                self.delivered = Some(id);
                self.state.status_message = Some("Thanks for your suggestion!".to_string());
                self.quit = true;
            }
            Err(err) => {
                self.push_error(format!("Failed to deliver suggestion: {err:#}"));
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(form) = self.state.form.as_mut() {
            let outcome = form.cancel();
            self.state.close_form(outcome);
        }
        self.quit = true;
    }

    /// Paste clipboard text into the focused field
    fn paste_clipboard(&mut self) {
        let focused_text_field = self
            .state
            .form
            .as_ref()
            .is_some_and(|form| form.focus() != FormFocus::Buttons);
        if !focused_text_field {
            return;
        }

        match read_clipboard() {
            Ok(text) => {
                if let Some(form) = self.state.form.as_mut() {
                    form.paste(&text);
                }
            }
            Err(err) => self.push_error(format!("Clipboard unavailable: {err}")),
        }
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
