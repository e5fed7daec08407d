//! Favorites - a reorderable form in the terminal
//!
//! Event -> FavoritesForm.handle_event() -> Actions -> Store -> re-render,
//! with every action reduced before the next event is read.
//!
//! # Usage
//!
//! ```sh
//! # Start with a single empty entry
//! cargo run -p favorites-form
//!
//! # Seed entries and keep a log
//! cargo run -p favorites-form -- --favorite ramen --favorite sushi --log-file favorites.log
//! ```

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use favorites_core::EntryList;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_dispatch::{
    process_raw_event, spawn_event_poller, LoggingMiddleware, RawEvent, StoreWithMiddleware,
};

use favorites_form::components::{Component, FavoritesForm, FavoritesFormProps};
use favorites_form::state::DEFAULT_TITLE;
use favorites_form::runtime::{self, Step};
use favorites_form::{logging, reducer, Action, AppState};

/// Reorderable favorites form
#[derive(Parser, Debug)]
#[command(name = "favorites")]
#[command(about = "Edit, reorder and submit a list of favorites")]
struct Args {
    /// Seed an entry (repeat for more). Without any, the form starts with one empty entry.
    #[arg(long = "favorite", short = 'f', value_name = "TEXT")]
    favorites: Vec<String>,

    /// Heading shown above the form
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init(args.log_file.as_deref(), &args.log_level)?;

    let entries = if args.favorites.is_empty() {
        EntryList::new()
    } else {
        EntryList::from_values(args.favorites)
    };
    tracing::info!(entries = entries.len(), "starting favorites form");
    let state = AppState::new(args.title, entries);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "favorites form exited with an error");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
) -> io::Result<()> {
    let mut store = StoreWithMiddleware::new(state, reducer, LoggingMiddleware::new());
    let mut ui = FavoritesForm::new();

    let size = terminal.size()?;
    store.dispatch(Action::UiTerminalResize(size.width, size.height));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                let area = frame.area();
                ui.render(
                    frame,
                    area,
                    FavoritesFormProps {
                        state: store.state(),
                    },
                );
            })?;
            should_render = false;
        }

        let Some(raw_event) = event_rx.recv().await else {
            break;
        };
        let event = process_raw_event(raw_event);

        match runtime::handle_event(&mut ui, &mut store, &event) {
            Step::Quit => break,
            Step::Continue { render } => should_render |= render,
        }
    }

    cancel_token.cancel();
    tracing::info!("favorites form closed");
    Ok(())
}
