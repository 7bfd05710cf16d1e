//! Delivery of submitted suggestions
//!
//! The form never performs I/O; the host hands each finished record to a
//! [`SuggestionSink`].

use super::SubmittedSuggestion;
use anyhow::{Context, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Destination for finished suggestions, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionSink: Send + Sync {
    /// Whether this sink is able to accept suggestions right now
    fn can_send(&self) -> bool;

    /// Deliver a suggestion, returning the id it was recorded under
    async fn deliver(&self, suggestion: &SubmittedSuggestion) -> Result<Uuid>;
}

/// One line of the JSON-lines output
#[derive(Serialize)]
struct DeliveryRecord<'a> {
    id: Uuid,
    suggestion: &'a SubmittedSuggestion,
}

/// Appends each suggestion as a JSON object on its own line
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: Option<PathBuf>,
}

impl JsonlSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Sink writing to `suggestions.jsonl` in the user data directory
    pub fn default_location() -> Self {
        Self {
            path: ProjectDirs::from("io", "suggestion", "suggestion-tui")
                .map(|dirs| dirs.data_dir().join("suggestions.jsonl")),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[async_trait]
impl SuggestionSink for JsonlSink {
    fn can_send(&self) -> bool {
        self.path.is_some()
    }

    async fn deliver(&self, suggestion: &SubmittedSuggestion) -> Result<Uuid> {
        let path = self
            .path
            .as_ref()
            .context("No data directory available for suggestions")?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let id = Uuid::new_v4();
        let mut line = serde_json::to_string(&DeliveryRecord { id, suggestion })?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(%id, path = %path.display(), "Suggestion delivered");
        Ok(id)
    }
}

/// Render a suggestion as a plain-text report, body first, for mail composition
pub fn format_report(suggestion: &SubmittedSuggestion) -> String {
    let metadata = suggestion.metadata();
    let reply_to = suggestion.content().reply_to().unwrap_or("(none)");

    format!(
        "{body}\n\n---\nApp: {app} {version}\nOS: {os}\nLocale: {locale}\nDate: {date}\nReply-To: {reply_to}\n",
        body = suggestion.body(),
        app = metadata.app_identifier,
        version = metadata.app_version,
        os = metadata.os_version,
        locale = metadata.locale,
        date = metadata.submitted_at.to_rfc3339(),
    )
}
