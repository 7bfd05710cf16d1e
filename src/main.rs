//! Suggestion TUI binary
//!
//! Presents the suggestion form full screen and delivers the result to the
//! configured sink.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use suggestion_tui::app::App;
use suggestion_tui::config::SuggestionConfig;
use suggestion_tui::suggestion::{format_report, FormOutcome};
use suggestion_tui::ui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suggestion_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SuggestionConfig::load()?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    report_outcome(&app);
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Ctrl+C leaves without an outcome
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            app.handle_key(key).await?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Print how the form ended once the terminal is restored
fn report_outcome(app: &App) {
    match (&app.state.outcome, app.delivered) {
        (Some(FormOutcome::Submitted(_)), Some(id)) => {
            println!("Suggestion sent ({id}). Thank you!");
        }
        (Some(FormOutcome::Submitted(suggestion)), None) => {
            // Delivery failed: print it so nothing is lost
            eprintln!("Suggestion could not be delivered:\n");
            println!("{}", format_report(suggestion));
        }
        (Some(FormOutcome::Cancelled), _) => println!("Suggestion cancelled."),
        (None, _) => {}
    }
}
