//! Suggestion domain types
//!
//! Options supplied when the form opens, the metadata attached at submit
//! time, and the immutable record handed back to the host.

mod delivery;
mod error;
mod metadata;

pub use delivery::{format_report, JsonlSink, SuggestionSink};
pub use error::FormError;

#[cfg(test)]
pub use delivery::MockSuggestionSink;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host-supplied settings for one presentation of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionOptions {
    /// Overrides the default screen caption
    pub title: Option<String>,
    /// Pre-fills the body
    pub initial_text: Option<String>,
    /// Overrides the default empty-body hint
    pub placeholder: Option<String>,
    /// Whether the email input is shown at all. Never gates submission.
    pub require_email_field: bool,
}

/// Environment facts attached to a submission.
///
/// Assembled by the host; the form carries it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionMetadata {
    pub app_identifier: String,
    pub app_version: String,
    pub os_version: String,
    pub locale: String,
    pub submitted_at: DateTime<Utc>,
}

/// What the user typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionContent {
    pub email: Option<String>,
    pub body: String,
}

impl SuggestionContent {
    /// Reply-to address, treating blank email text as absent
    pub fn reply_to(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// A finished suggestion. Built once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedSuggestion {
    metadata: SuggestionMetadata,
    content: SuggestionContent,
}

impl SubmittedSuggestion {
    pub(crate) fn new(metadata: SuggestionMetadata, content: SuggestionContent) -> Self {
        Self { metadata, content }
    }

    pub fn metadata(&self) -> &SuggestionMetadata {
        &self.metadata
    }

    pub fn content(&self) -> &SuggestionContent {
        &self.content
    }

    pub fn email(&self) -> Option<&str> {
        self.content.email.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.content.body
    }
}

/// Terminal signal of a form presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted(SubmittedSuggestion),
    Cancelled,
}

#[cfg(test)]
pub(crate) fn test_metadata() -> SuggestionMetadata {
    use chrono::TimeZone;

    SuggestionMetadata {
        app_identifier: "io.example.app".to_string(),
        app_version: "1.2.3".to_string(),
        os_version: "Linux 6.1".to_string(),
        locale: "en_US".to_string(),
        submitted_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
    }
}
