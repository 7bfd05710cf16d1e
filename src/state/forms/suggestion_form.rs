//! Suggestion form state
//!
//! Owns the editable body and email text and the submit-eligibility rule.
//! Produces a [`SubmittedSuggestion`] or a cancellation; never touches the
//! terminal, the filesystem or navigation.

use super::field::FormField;
use crate::suggestion::{
    FormError, FormOutcome, SubmittedSuggestion, SuggestionContent, SuggestionMetadata,
    SuggestionOptions,
};

/// Caption used when the options do not provide one
pub const DEFAULT_TITLE: &str = "Suggestions";
/// Body hint used when the options do not provide one
pub const DEFAULT_PLACEHOLDER: &str = "Tell us what you think";
/// Email hint
pub const EMAIL_PLACEHOLDER: &str = "Email (optional, for a reply)";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Lifecycle of one presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editable,
    Closed,
}

/// Element that currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Body,
    Email,
    Buttons,
}

/// Buttons on the action row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Cancel,
    Submit,
}

impl FormButton {
    pub fn label(self) -> &'static str {
        match self {
            FormButton::Cancel => "Cancel",
            FormButton::Submit => "Submit",
        }
    }

    fn toggled(self) -> Self {
        match self {
            FormButton::Cancel => FormButton::Submit,
            FormButton::Submit => FormButton::Cancel,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionForm {
    title: String,
    body: FormField,
    email: FormField,
    show_email: bool,
    can_submit: bool,
    phase: FormPhase,
    active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
}

impl SuggestionForm {
    pub fn new(options: SuggestionOptions) -> Self {
        let SuggestionOptions {
            title,
            initial_text,
            placeholder,
            require_email_field,
        } = options;

        let mut form = Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body: FormField::text_with_value(
                "body",
                "Message",
                placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER),
                String::new(),
                true,
            ),
            email: FormField::text("email", "Email", EMAIL_PLACEHOLDER, false),
            show_email: require_email_field,
            can_submit: false,
            phase: FormPhase::Editable,
            active_field_index: 0,
            selected_button: FormButton::Submit,
        };
        form.apply_body(initial_text.unwrap_or_default());
        form
    }

    /// Replace the body and recompute submit eligibility
    pub fn on_body_changed(&mut self, new_body: impl Into<String>) {
        if self.reject_if_closed("body edit") {
            return;
        }
        self.apply_body(new_body.into());
    }

    /// Replace the email text verbatim. Submit eligibility is unaffected.
    pub fn on_email_changed(&mut self, new_email: impl Into<String>) {
        if self.reject_if_closed("email edit") {
            return;
        }
        self.email.set_text(new_email.into());
    }

    /// Build the finished record from the current text and `metadata`.
    ///
    /// On success the form is closed and should be discarded.
    pub fn submit(
        &mut self,
        metadata: SuggestionMetadata,
    ) -> Result<SubmittedSuggestion, FormError> {
        if self.phase == FormPhase::Closed {
            return Err(FormError::Closed);
        }
        if !self.can_submit {
            tracing::debug!("Submit rejected: body is empty");
            return Err(FormError::NotSubmittable);
        }

        let content = SuggestionContent {
            email: Some(self.email.as_text().to_string()),
            body: self.body.as_text().to_string(),
        };
        self.phase = FormPhase::Closed;
        tracing::info!(
            chars = content.body.chars().count(),
            has_email = content.reply_to().is_some(),
            "Suggestion submitted"
        );
        Ok(SubmittedSuggestion::new(metadata, content))
    }

    /// Cancel the form. Always accepted.
    pub fn cancel(&mut self) -> FormOutcome {
        self.phase = FormPhase::Closed;
        tracing::info!("Suggestion cancelled");
        FormOutcome::Cancelled
    }

    fn apply_body(&mut self, body: String) {
        self.can_submit = !body.trim().is_empty();
        self.body.set_text(body);
    }

    fn reject_if_closed(&self, operation: &str) -> bool {
        if self.phase == FormPhase::Closed {
            tracing::warn!(operation, "Ignoring edit on closed suggestion form");
            return true;
        }
        false
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        self.body.as_text()
    }

    pub fn email(&self) -> &str {
        self.email.as_text()
    }

    pub fn body_field(&self) -> &FormField {
        &self.body
    }

    pub fn email_field(&self) -> &FormField {
        &self.email
    }

    pub fn placeholder(&self) -> &str {
        &self.body.placeholder
    }

    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == FormPhase::Closed
    }

    /// Returns true while the body is empty and the hint should show
    pub fn is_placeholder_visible(&self) -> bool {
        self.body.is_empty()
    }

    pub fn shows_email_field(&self) -> bool {
        self.show_email
    }

    /// Whether the submit affordance should be enabled
    pub fn is_submit_enabled(&self) -> bool {
        self.can_submit && self.phase == FormPhase::Editable
    }

    /// The element that currently has focus
    pub fn focus(&self) -> FormFocus {
        match (self.active_field_index, self.show_email) {
            (0, _) => FormFocus::Body,
            (1, true) => FormFocus::Email,
            _ => FormFocus::Buttons,
        }
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        let index = match focus {
            FormFocus::Body => 0,
            FormFocus::Email if self.show_email => 1,
            FormFocus::Email => return,
            FormFocus::Buttons => self.field_count() - 1,
        };
        self.set_active_field(index);
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.focus() == FormFocus::Buttons
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggled();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.toggled();
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        match self.focus() {
            FormFocus::Body => self.on_body_changed(self.body.with_char(c)),
            FormFocus::Email => self.on_email_changed(self.email.with_char(c)),
            FormFocus::Buttons => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        match self.focus() {
            FormFocus::Body => self.on_body_changed(self.body.without_last_char()),
            FormFocus::Email => self.on_email_changed(self.email.without_last_char()),
            FormFocus::Buttons => {}
        }
    }

    /// Append pasted text to the focused text field
    pub fn paste(&mut self, text: &str) {
        match self.focus() {
            FormFocus::Body => self.on_body_changed(self.body.with_pasted(text)),
            FormFocus::Email => self.on_email_changed(self.email.with_pasted(text)),
            FormFocus::Buttons => {}
        }
    }

    /// Handle Enter: newline in the body, jump from email to body, or
    /// press the selected button (returned to the caller to act on)
    pub fn enter(&mut self) -> Option<FormButton> {
        match self.focus() {
            FormFocus::Body => {
                self.input_char('\n');
                None
            }
            FormFocus::Email => {
                self.set_focus(FormFocus::Body);
                None
            }
            FormFocus::Buttons => Some(self.selected_button),
        }
    }
}

impl Form for SuggestionForm {
    fn field_count(&self) -> usize {
        // body, [email], buttons
        if self.show_email {
            3
        } else {
            2
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match (index, self.show_email) {
            (0, _) => Some(&self.body),
            (1, true) => Some(&self.email),
            // Last index is the buttons row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::test_metadata;

    fn form_with(initial_text: Option<&str>, require_email_field: bool) -> SuggestionForm {
        SuggestionForm::new(SuggestionOptions {
            initial_text: initial_text.map(str::to_string),
            require_email_field,
            ..Default::default()
        })
    }

    const SAMPLES: [&str; 9] = [
        "",
        " ",
        "\n\t  \r\n",
        "\u{3000}",
        "a",
        "  padded  ",
        "line one\nline two",
        "😀",
        "\n.\n",
    ];

    mod initialize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_text_seeds_body() {
            let form = form_with(Some("hi"), false);
            assert_eq!(form.body(), "hi");
            assert!(form.can_submit());
        }

        #[test]
        fn test_no_initial_text_is_empty() {
            let form = SuggestionForm::new(SuggestionOptions::default());
            assert_eq!(form.body(), "");
            assert_eq!(form.email(), "");
            assert!(!form.can_submit());
            assert_eq!(form.phase(), FormPhase::Editable);
        }

        #[test]
        fn test_whitespace_initial_text_not_submittable() {
            let form = form_with(Some("   \n"), false);
            assert_eq!(form.body(), "   \n");
            assert!(!form.can_submit());
        }

        #[test]
        fn test_default_title_and_placeholder() {
            let form = SuggestionForm::new(SuggestionOptions::default());
            assert_eq!(form.title(), DEFAULT_TITLE);
            assert_eq!(form.placeholder(), DEFAULT_PLACEHOLDER);
        }

        #[test]
        fn test_options_override_title_and_placeholder() {
            let form = SuggestionForm::new(SuggestionOptions {
                title: Some("Feedback".to_string()),
                placeholder: Some("What went wrong?".to_string()),
                ..Default::default()
            });
            assert_eq!(form.title(), "Feedback");
            assert_eq!(form.placeholder(), "What went wrong?");
        }

        #[test]
        fn test_focus_starts_on_body_with_submit_selected() {
            let form = form_with(None, true);
            assert_eq!(form.focus(), FormFocus::Body);
            assert_eq!(form.selected_button, FormButton::Submit);
        }
    }

    mod eligibility {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_can_submit_tracks_trimmed_body() {
            let mut form = form_with(None, false);
            for sample in SAMPLES {
                form.on_body_changed(sample);
                assert_eq!(form.body(), sample);
                assert_eq!(
                    form.can_submit(),
                    !sample.trim().is_empty(),
                    "sample {sample:?}"
                );
            }
        }

        #[test]
        fn test_email_never_affects_can_submit() {
            for require_email_field in [false, true] {
                let mut form = form_with(None, require_email_field);
                for body in SAMPLES {
                    form.on_body_changed(body);
                    let before = form.can_submit();
                    for email in ["", "me@example.com", "not an email", "  "] {
                        form.on_email_changed(email);
                        assert_eq!(form.can_submit(), before);
                    }
                }
            }
        }

        #[test]
        fn test_email_not_required_even_when_shown() {
            let mut form = form_with(None, true);
            form.on_body_changed("works");
            assert!(form.can_submit());
            assert!(form.submit(test_metadata()).is_ok());
        }

        #[test]
        fn test_email_stored_verbatim() {
            let mut form = form_with(None, true);
            form.on_email_changed("  Not@Validated ");
            assert_eq!(form.email(), "  Not@Validated ");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_rejected_when_not_submittable() {
            let mut form = form_with(None, false);
            form.on_body_changed("  ");
            assert_eq!(
                form.submit(test_metadata()),
                Err(FormError::NotSubmittable)
            );
            assert_eq!(form.phase(), FormPhase::Editable);
        }

        #[test]
        fn test_submit_copies_current_values() {
            let mut form = form_with(Some("draft"), true);
            form.on_body_changed("final text");
            form.on_email_changed("me@example.com");

            let record = form.submit(test_metadata()).unwrap();
            assert_eq!(record.body(), "final text");
            assert_eq!(record.email(), Some("me@example.com"));
            assert_eq!(record.metadata(), &test_metadata());
        }

        #[test]
        fn test_submit_closes_form() {
            let mut form = form_with(Some("x"), false);
            form.submit(test_metadata()).unwrap();
            assert!(form.is_closed());
            assert!(!form.is_submit_enabled());
            assert_eq!(form.submit(test_metadata()), Err(FormError::Closed));
        }

        #[test]
        fn test_edits_after_close_are_ignored() {
            let mut form = form_with(Some("kept"), true);
            form.submit(test_metadata()).unwrap();
            form.on_body_changed("");
            form.on_email_changed("late@example.com");
            assert_eq!(form.body(), "kept");
            assert_eq!(form.email(), "");
            assert!(form.can_submit());
        }

        #[test]
        fn test_end_to_end_submit() {
            let mut form = SuggestionForm::new(SuggestionOptions::default());
            form.on_body_changed("Great app!");
            assert!(form.can_submit());

            let record = form.submit(test_metadata()).unwrap();
            assert_eq!(
                record,
                SubmittedSuggestion::new(
                    test_metadata(),
                    SuggestionContent {
                        email: Some(String::new()),
                        body: "Great app!".to_string(),
                    },
                )
            );
        }

        #[test]
        fn test_end_to_end_cleared_draft() {
            let mut form = form_with(Some("draft"), false);
            form.on_body_changed("");
            assert!(!form.can_submit());
            assert_eq!(
                form.submit(test_metadata()),
                Err(FormError::NotSubmittable)
            );
        }
    }

    mod cancellation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cancel_always_accepted() {
            let mut form = form_with(None, true);
            form.on_body_changed("something");
            form.on_email_changed("a@b.c");
            assert_eq!(form.cancel(), FormOutcome::Cancelled);
            assert!(form.is_closed());
        }

        #[test]
        fn test_cancel_on_untouched_form() {
            let mut form = SuggestionForm::new(SuggestionOptions::default());
            assert_eq!(form.cancel(), FormOutcome::Cancelled);
        }

        #[test]
        fn test_cancel_after_submit_still_accepted() {
            let mut form = form_with(Some("x"), false);
            form.submit(test_metadata()).unwrap();
            assert_eq!(form.cancel(), FormOutcome::Cancelled);
        }
    }

    mod presentation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_placeholder_visibility() {
            let mut form = form_with(None, false);
            assert!(form.is_placeholder_visible());
            form.on_body_changed(" ");
            assert!(!form.is_placeholder_visible());
            form.on_body_changed("");
            assert!(form.is_placeholder_visible());
        }

        #[test]
        fn test_initial_text_hides_placeholder() {
            assert!(!form_with(Some("hello"), false).is_placeholder_visible());
        }

        #[test]
        fn test_submit_enabled_follows_can_submit() {
            let mut form = form_with(None, false);
            assert!(!form.is_submit_enabled());
            form.on_body_changed("ok");
            assert!(form.is_submit_enabled());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_depends_on_email() {
            assert_eq!(form_with(None, true).field_count(), 3);
            assert_eq!(form_with(None, false).field_count(), 2);
        }

        #[test]
        fn test_next_field_cycles_with_email() {
            let mut form = form_with(None, true);
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Email);
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Buttons);
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Body);
        }

        #[test]
        fn test_next_field_skips_hidden_email() {
            let mut form = form_with(None, false);
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Buttons);
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Body);
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut form = form_with(None, true);
            form.prev_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = form_with(None, false);
            form.set_active_field(100);
            assert_eq!(form.active_field(), 1);
        }

        #[test]
        fn test_set_focus_email_ignored_when_hidden() {
            let mut form = form_with(None, false);
            form.set_focus(FormFocus::Email);
            assert_eq!(form.focus(), FormFocus::Body);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = form_with(None, true);
            assert_eq!(form.get_field(0).unwrap().name, "body");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert!(form.get_field(2).is_none());

            let form = form_with(None, false);
            assert_eq!(form.get_field(0).unwrap().name, "body");
            assert!(form.get_field(1).is_none());
        }

        #[test]
        fn test_buttons_toggle() {
            let mut form = form_with(None, false);
            form.next_button();
            assert_eq!(form.selected_button, FormButton::Cancel);
            form.prev_button();
            assert_eq!(form.selected_button, FormButton::Submit);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_into_body_updates_eligibility() {
            let mut form = form_with(None, false);
            form.input_char(' ');
            assert!(!form.can_submit());
            form.input_char('x');
            assert!(form.can_submit());
            form.backspace();
            assert_eq!(form.body(), " ");
            assert!(!form.can_submit());
        }

        #[test]
        fn test_typing_into_email() {
            let mut form = form_with(None, true);
            form.set_focus(FormFocus::Email);
            for c in "me@x.io".chars() {
                form.input_char(c);
            }
            assert_eq!(form.email(), "me@x.io");
            assert_eq!(form.body(), "");
            assert!(!form.can_submit());
        }

        #[test]
        fn test_typing_on_buttons_row_is_ignored() {
            let mut form = form_with(Some("keep"), false);
            form.set_focus(FormFocus::Buttons);
            form.input_char('z');
            form.backspace();
            form.paste("zzz");
            assert_eq!(form.body(), "keep");
        }

        #[test]
        fn test_paste_into_body() {
            let mut form = form_with(None, false);
            form.paste("line 1\r\nline 2");
            assert_eq!(form.body(), "line 1\nline 2");
            assert!(form.can_submit());
        }

        #[test]
        fn test_enter_in_body_adds_newline() {
            let mut form = form_with(Some("a"), false);
            assert_eq!(form.enter(), None);
            assert_eq!(form.body(), "a\n");
        }

        #[test]
        fn test_enter_in_email_moves_to_body() {
            let mut form = form_with(None, true);
            form.set_focus(FormFocus::Email);
            assert_eq!(form.enter(), None);
            assert_eq!(form.focus(), FormFocus::Body);
            assert_eq!(form.email(), "");
        }

        #[test]
        fn test_enter_on_buttons_returns_selection() {
            let mut form = form_with(None, false);
            form.set_focus(FormFocus::Buttons);
            assert_eq!(form.enter(), Some(FormButton::Submit));
            form.next_button();
            assert_eq!(form.enter(), Some(FormButton::Cancel));
        }
    }
}
