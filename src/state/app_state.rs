//! Application state definitions

use super::forms::{FormController, FormRecord};
use crate::firestore::{DocumentId, PersistenceError};
use std::collections::VecDeque;

/// Phase of the submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Result of one completed write, as delivered back to the UI
#[derive(Debug)]
pub enum SubmitOutcome {
    Succeeded(DocumentId),
    Failed(PersistenceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Modal message shown to the user until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "Saved",
            NoticeKind::Error => "Error",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The form being edited
    pub form: FormController,
    /// Writes dispatched but not yet answered
    in_flight: usize,
    /// Notices waiting to be dismissed, oldest first
    notices: VecDeque<Notice>,
}

impl AppState {
    pub fn phase(&self) -> SubmitPhase {
        if self.in_flight > 0 {
            SubmitPhase::Submitting
        } else {
            SubmitPhase::Idle
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Enter `Submitting` and return the record to send
    pub fn begin_submit(&mut self) -> FormRecord {
        self.in_flight += 1;
        self.form.snapshot()
    }

    /// Leave `Submitting` for one finished write.
    ///
    /// Success clears the form. Failure leaves it as it is.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let SubmitOutcome::Succeeded(_) = outcome {
            self.form.reset();
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}
