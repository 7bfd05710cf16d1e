//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `suggestion_form`: The suggestion screen

mod field_renderer;
mod suggestion_form;

pub use suggestion_form::draw_suggestion_form;
