//! Suggestion form rendering

use super::field_renderer::draw_field;
use crate::state::{FormButton, FormFocus, SuggestionForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 12;

/// Draw the suggestion form
pub fn draw_suggestion_form(frame: &mut Frame, area: Rect, form: &SuggestionForm) {
    let mut constraints = vec![Constraint::Min(5)]; // Body
    if form.shows_email_field() {
        constraints.push(Constraint::Length(3)); // Email
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let focus = form.focus();
    let mut next = 0;
    draw_field(frame, chunks[next], form.body_field(), focus == FormFocus::Body);
    next += 1;

    if form.shows_email_field() {
        draw_field(
            frame,
            chunks[next],
            form.email_field(),
            focus == FormFocus::Email,
        );
        next += 1;
    }

    draw_buttons(frame, chunks[next], form);
    draw_help_text(frame, chunks[next + 1], focus);
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &SuggestionForm) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(area);

    let on_buttons = form.is_buttons_row_active();
    for (button, slot) in [(FormButton::Cancel, row[1]), (FormButton::Submit, row[3])] {
        let enabled = match button {
            FormButton::Cancel => true,
            FormButton::Submit => form.is_submit_enabled(),
        };
        let selected = on_buttons && form.selected_button == button;
        render_button(frame, slot, button.label(), selected, enabled);
    }
}

fn draw_help_text(frame: &mut Frame, area: Rect, focus: FormFocus) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key),
        Span::raw(": next  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key),
        Span::raw(": submit  "),
    ];
    match focus {
        FormFocus::Buttons => {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::raw(": choose  "));
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": press  "));
        }
        FormFocus::Body | FormFocus::Email => {
            spans.push(Span::styled(crate::platform::PASTE_SHORTCUT, key));
            spans.push(Span::raw(": paste  "));
        }
    }
    spans.push(Span::styled("Esc", key));
    spans.push(Span::raw(": cancel"));

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
