//! Persistence failure type

use thiserror::Error;

/// Any failure of a create-document call.
///
/// Callers treat every variant the same way; the variants only exist so the
/// diagnostic log says what went wrong.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not reach the database: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("database rejected the write ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response from the database: {0}")]
    MalformedResponse(String),
}

impl PersistenceError {
    /// Wrap a transport failure without its request URL, which can carry
    /// the API key.
    pub fn transport(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url())
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
