//! Configuration handling for the TUI

use crate::suggestion::{JsonlSink, SuggestionOptions};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the suggestion form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuggestionConfig {
    /// Screen caption
    pub title: Option<String>,
    /// Empty-body hint
    pub placeholder: Option<String>,
    /// Text the body starts with
    pub initial_text: Option<String>,
    /// Show the reply-to email field
    pub require_email_field: Option<bool>,
    /// Application identifier reported with each suggestion
    pub app_identifier: Option<String>,
    /// Application version reported with each suggestion
    pub app_version: Option<String>,
    /// File suggestions are appended to
    pub output_path: Option<PathBuf>,
}

impl SuggestionConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "suggestion", "suggestion-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SuggestionConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to `path` as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Options for opening the form
    pub fn options(&self) -> SuggestionOptions {
        SuggestionOptions {
            title: self.title.clone(),
            initial_text: self.initial_text.clone(),
            placeholder: self.placeholder.clone(),
            require_email_field: self.require_email_field.unwrap_or(true),
        }
    }

    /// Sink for submitted suggestions
    pub fn sink(&self) -> JsonlSink {
        match &self.output_path {
            Some(path) => JsonlSink::new(path),
            None => JsonlSink::default_location(),
        }
    }
}
