//! Form domain layer
//!
//! The record being edited, the identifiers of its fields and the controller
//! that applies edits to it.

mod field;
mod form_state;
mod record;

use thiserror::Error;

pub use field::{FieldId, Section, Tone};
pub use form_state::{FormController, FormFocus};
pub use record::FormRecord;

/// Rejected form edit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown tone: {0} (expected Formal, Conversational, Bold or Enthusiastic)")]
    UnknownTone(String),
}
