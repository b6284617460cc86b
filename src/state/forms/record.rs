//! The record collected by the form

use super::field::{FieldId, Tone};
use serde::{Deserialize, Serialize};

/// One in-progress submission: eight free-text fields and a tone.
///
/// Every field always has a value, so a serialized record carries all nine
/// keys no matter which fields were edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    pub skills: String,
    pub core_values: String,
    pub passions: String,
    pub anecdotes: String,
    pub tone: Tone,
}

impl FormRecord {
    /// Borrow the text of a free-text field. `None` for the tone.
    pub fn text(&self, field: FieldId) -> Option<&str> {
        self.text_slot(field).map(String::as_str)
    }

    /// Mutable access to the backing string of a free-text field
    pub(super) fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Situation => Some(&mut self.situation),
            FieldId::Task => Some(&mut self.task),
            FieldId::Action => Some(&mut self.action),
            FieldId::Result => Some(&mut self.result),
            FieldId::Skills => Some(&mut self.skills),
            FieldId::CoreValues => Some(&mut self.core_values),
            FieldId::Passions => Some(&mut self.passions),
            FieldId::Anecdotes => Some(&mut self.anecdotes),
            FieldId::Tone => None,
        }
    }

    fn text_slot(&self, field: FieldId) -> Option<&String> {
        match field {
            FieldId::Situation => Some(&self.situation),
            FieldId::Task => Some(&self.task),
            FieldId::Action => Some(&self.action),
            FieldId::Result => Some(&self.result),
            FieldId::Skills => Some(&self.skills),
            FieldId::CoreValues => Some(&self.core_values),
            FieldId::Passions => Some(&self.passions),
            FieldId::Anecdotes => Some(&self.anecdotes),
            FieldId::Tone => None,
        }
    }

    /// Value of any field as it is stored
    pub fn value(&self, field: FieldId) -> &str {
        match self.text(field) {
            Some(text) => text,
            None => self.tone.label(),
        }
    }

    /// `(key, value)` pairs for every field, in display order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FieldId::ALL
            .into_iter()
            .map(move |field| (field.name(), self.value(field)))
    }
}
