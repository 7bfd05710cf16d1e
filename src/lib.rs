//! Suggestion TUI - a modal "send suggestion" form for the terminal
//!
//! The [`state::SuggestionForm`] core owns the editable text and the
//! submit-eligibility rule. The [`app::App`] host wires it to key events,
//! environment metadata and a [`suggestion::SuggestionSink`].

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod suggestion;
pub mod ui;
