//! Application state and core logic

use crate::firestore::{Endpoint, PersistenceGateway};
use crate::state::{AppState, FormFocus, Notice, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Write path to the database
    gateway: PersistenceGateway,
    /// Finished writes travel back to the event loop through this channel
    outcome_tx: UnboundedSender<SubmitOutcome>,
    outcome_rx: UnboundedReceiver<SubmitOutcome>,
    /// Where diagnostics are written, shown in error notices
    log_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(gateway: PersistenceGateway, log_path: Option<PathBuf>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            gateway,
            outcome_tx,
            outcome_rx,
            log_path,
            quit: false,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.gateway.endpoint()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('q') {
            self.request_quit();
            return;
        }

        // Notices are modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        // Save (Ctrl+S or Cmd+S)
        if key.code == KeyCode::Char('s')
            && (ctrl || key.modifiers.contains(crate::platform::SAVE_MODIFIER))
        {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.next_field();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.prev_field();
                return;
            }
            _ => {}
        }

        match self.state.form.focus() {
            FormFocus::SubmitButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
            FormFocus::Field(field) if field.is_tone() => match key.code {
                KeyCode::Left => self.state.form.prev_tone(),
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    self.state.form.next_tone()
                }
                _ => {}
            },
            FormFocus::Field(field) => match key.code {
                KeyCode::Char(c) if !ctrl => self.state.form.push_char(c),
                KeyCode::Backspace => self.state.form.pop_char(),
                KeyCode::Enter if field.is_multiline() => self.state.form.push_newline(),
                KeyCode::Enter => self.state.form.next_field(),
                _ => {}
            },
        }
    }

    /// Send a snapshot of the form to the database.
    ///
    /// The write runs on its own task; its outcome is picked up by
    /// [`App::poll_submissions`]. Editing stays possible meanwhile.
    pub fn submit(&mut self) {
        let record = self.state.begin_submit();
        let gateway = self.gateway.clone();
        let tx = self.outcome_tx.clone();

        tracing::debug!(in_flight = self.state.in_flight(), "Submitting form");
        tokio::spawn(async move {
            let outcome = match gateway.save(&record).await {
                Ok(id) => SubmitOutcome::Succeeded(id),
                Err(e) => SubmitOutcome::Failed(e),
            };
            // The receiver only goes away when the app shuts down
            let _ = tx.send(outcome);
        });
    }

    /// Apply every write that finished since the last call
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Wait for the next write to finish and apply it
    pub async fn wait_for_submission(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }

    /// Wait until every dispatched write has reported back
    pub async fn finish_pending(&mut self) {
        while self.state.in_flight() > 0 {
            self.wait_for_submission().await;
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.state.finish_submit(&outcome);
        let notice = match &outcome {
            SubmitOutcome::Succeeded(id) => Notice::success(format!(
                "Successfully saved to {} (document {id}).",
                self.endpoint()
            )),
            SubmitOutcome::Failed(_) => Notice::error(self.failure_message()),
        };
        self.state.push_notice(notice);
    }

    fn failure_message(&self) -> String {
        match &self.log_path {
            Some(path) => format!(
                "Error saving to database. Check the log at {} for details.",
                path.display()
            ),
            None => "Error saving to database. Check the diagnostic output for details."
                .to_string(),
        }
    }
}
