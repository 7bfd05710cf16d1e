//! Suggestion form error types

/// Errors raised by [`SuggestionForm`](crate::state::SuggestionForm) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Submit was requested while the body is empty after trimming
    #[error("Suggestion cannot be submitted: the message is empty")]
    NotSubmittable,

    /// The form already produced its outcome and must be discarded
    #[error("Suggestion form is already closed")]
    Closed,
}
