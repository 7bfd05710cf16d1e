//! Host environment metadata collection

use super::SuggestionMetadata;
use chrono::Utc;
use sysinfo::System;

/// Locale reported when the environment does not name one
const DEFAULT_LOCALE: &str = "en_US";

/// Environment variables consulted for the locale, highest priority first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

impl SuggestionMetadata {
    /// Gather metadata from the running process and host.
    ///
    /// `app_identifier` and `app_version` fall back to the crate name and
    /// version when not configured.
    pub fn collect(app_identifier: Option<&str>, app_version: Option<&str>) -> Self {
        let metadata = Self {
            app_identifier: app_identifier
                .unwrap_or(env!("CARGO_PKG_NAME"))
                .to_string(),
            app_version: app_version
                .unwrap_or(env!("CARGO_PKG_VERSION"))
                .to_string(),
            os_version: os_version(),
            locale: locale_from(|key| std::env::var(key).ok()),
            submitted_at: Utc::now(),
        };
        tracing::debug!(
            app = %metadata.app_identifier,
            version = %metadata.app_version,
            os = %metadata.os_version,
            locale = %metadata.locale,
            "Collected suggestion metadata"
        );
        metadata
    }
}

fn os_version() -> String {
    System::long_os_version().unwrap_or_else(|| std::env::consts::OS.to_string())
}

/// Resolve the locale identifier using `lookup` for environment access
fn locale_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    LOCALE_VARS
        .into_iter()
        .filter_map(|key| lookup(key))
        .find_map(|raw| normalize_locale(&raw))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Strip codeset and modifier (`de_DE.UTF-8@euro` -> `de_DE`).
/// `C` and `POSIX` name no real locale.
fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    match base {
        "" | "C" | "POSIX" => None,
        _ => Some(base.to_string()),
    }
}
