//! Kariyera TUI - capture STAR stories and personal values
//!
//! A Ratatui-based form that writes each submission as one document to
//! Cloud Firestore, or to the local emulator during development.

mod app;
mod config;
mod firestore;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use firestore::{Endpoint, PersistenceGateway};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "kariyera-tui.log";

/// How long to wait for writes still in flight when quitting
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = init_logging();

    let config = AppConfig::load()?;

    // Resolved once; every write of this session goes to the same endpoint
    let host = Endpoint::host_identifier(&config);
    let endpoint = Endpoint::resolve(host.as_deref(), &config);
    tracing::info!(host = ?host, endpoint = %endpoint, "Selected database endpoint");

    let gateway = PersistenceGateway::new(endpoint);
    let mut app = App::new(gateway, log_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish_pending_writes(&mut app).await;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Fatal error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send diagnostics to a log file so they do not draw over the form.
///
/// Falls back to stderr when no data directory is available. Returns the
/// log file path when one is used.
fn init_logging() -> Option<PathBuf> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kariyera_tui=info".into());

    let log_file = AppConfig::log_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        let path = dir.join(LOG_FILE_NAME);
        let file = File::options().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    });

    match log_file {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
            Some(path)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}

/// Let writes dispatched before quitting complete and report their results
async fn finish_pending_writes(app: &mut App) {
    let pending = app.state.in_flight();
    if pending == 0 {
        return;
    }

    // Only the outcomes of these writes are reported below
    while app.state.has_notice() {
        app.state.dismiss_notice();
    }

    tracing::info!(pending, "Waiting for pending writes before exit");
    eprintln!("Waiting for {pending} pending save(s)...");
    if tokio::time::timeout(SHUTDOWN_GRACE, app.finish_pending())
        .await
        .is_err()
    {
        let abandoned = app.state.in_flight();
        tracing::warn!(abandoned, "Gave up waiting for pending writes");
        eprintln!("{abandoned} save(s) did not finish and may not have been stored.");
    }

    while let Some(notice) = app.state.current_notice() {
        eprintln!("{}", notice.message);
        app.state.dismiss_notice();
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up writes that finished since the last frame
        app.poll_submissions();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key);
            }
            // Resize and other events are picked up by the next draw
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
