//! Form domain layer
//!
//! This module provides the suggestion form state and its field value objects.

mod field;
mod suggestion_form;

pub use field::FormField;
pub use suggestion_form::{
    Form, FormButton, FormFocus, FormPhase, SuggestionForm, DEFAULT_PLACEHOLDER, DEFAULT_TITLE,
    EMAIL_PLACEHOLDER,
};
