//! Form state controller

use super::field::{FieldId, Tone};
use super::record::FormRecord;
use super::FormError;

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldId),
    SubmitButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FieldId::ALL[0])
    }
}

impl FormFocus {
    /// Number of focus stops: every field plus the submit button
    pub const COUNT: usize = FieldId::ALL.len() + 1;

    fn index(&self) -> usize {
        match self {
            Self::Field(f) => f.index(),
            Self::SubmitButton => FieldId::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        FieldId::ALL
            .get(index)
            .copied()
            .map(Self::Field)
            .unwrap_or(Self::SubmitButton)
    }

    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::Field(f) => Some(*f),
            Self::SubmitButton => None,
        }
    }
}

/// Owns the single in-memory record and the focus used to edit it
#[derive(Debug, Clone, Default)]
pub struct FormController {
    record: FormRecord,
    focus: FormFocus,
}

impl FormController {
    /// Replace the value of a field.
    ///
    /// Text fields take any string. The tone only takes one of the four
    /// tone names; anything else leaves the record untouched.
    pub fn update(&mut self, field: FieldId, value: &str) -> Result<(), FormError> {
        if field.is_tone() {
            self.set_tone(value.parse()?);
        } else {
            self.set_text(field, value);
        }
        Ok(())
    }

    /// Replace a free-text field. Ignored for the tone field.
    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) {
        if let Some(slot) = self.record.text_mut(field) {
            *slot = value.into();
        }
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.record.tone = tone;
    }

    /// Restore every field to its default value
    pub fn reset(&mut self) {
        self.record = FormRecord::default();
    }

    /// Copy of the current record
    pub fn snapshot(&self) -> FormRecord {
        self.record.clone()
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    #[cfg(test)]
    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    pub fn active_field(&self) -> Option<FieldId> {
        self.focus.field()
    }

    pub fn is_submit_focused(&self) -> bool {
        matches!(self.focus, FormFocus::SubmitButton)
    }

    pub fn next_field(&mut self) {
        let next = (self.focus.index() + 1) % FormFocus::COUNT;
        self.focus = FormFocus::from_index(next);
    }

    pub fn prev_field(&mut self) {
        let current = self.focus.index();
        let prev = if current == 0 {
            FormFocus::COUNT - 1
        } else {
            current - 1
        };
        self.focus = FormFocus::from_index(prev);
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        self.edit_focused_text(|value| value.push(c));
    }

    /// Insert a line break if the focused field is a text area
    pub fn push_newline(&mut self) {
        if self.active_field().is_some_and(|f| f.is_multiline()) {
            self.push_char('\n');
        }
    }

    /// Remove the last character from the focused text field
    pub fn pop_char(&mut self) {
        self.edit_focused_text(|value| {
            value.pop();
        });
    }

    pub fn next_tone(&mut self) {
        self.set_tone(self.record.tone.next());
    }

    pub fn prev_tone(&mut self) {
        self.set_tone(self.record.tone.prev());
    }

    /// Apply `edit` to a copy of the focused text and store it through
    /// [`FormController::update`]. No-op on the tone selector and the button.
    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.active_field().filter(|f| !f.is_tone()) else {
            return;
        };
        let mut value = self.record.value(field).to_string();
        edit(&mut value);
        if let Err(e) = self.update(field, &value) {
            tracing::warn!(field = %field, error = %e, "Edit rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod updates {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_replaces_text() {
            let mut form = FormController::default();
            form.update(FieldId::Situation, "Led a cross-team migration")
                .unwrap();
            assert_eq!(form.record().situation, "Led a cross-team migration");

            form.update(FieldId::Situation, "").unwrap();
            assert_eq!(form.record().situation, "");
        }

        #[test]
        fn test_update_tone_accepts_known_names() {
            let mut form = FormController::default();
            form.update(FieldId::Tone, "Bold").unwrap();
            assert_eq!(form.record().tone, Tone::Bold);
        }

        #[test]
        fn test_update_tone_rejects_unknown_name_without_mutating() {
            let mut form = FormController::default();
            form.update(FieldId::Tone, "Enthusiastic").unwrap();
            let before = form.snapshot();

            let err = form.update(FieldId::Tone, "Casual").unwrap_err();
            assert!(matches!(err, FormError::UnknownTone(_)));
            assert_eq!(form.snapshot(), before);
        }

        #[test]
        fn test_update_sequence_keeps_all_keys() {
            let mut form = FormController::default();
            for (i, field) in FieldId::ALL.iter().enumerate() {
                if field.is_tone() {
                    form.update(*field, "Conversational").unwrap();
                } else {
                    form.update(*field, &format!("value {i}")).unwrap();
                }
            }
            form.update(FieldId::Task, "").unwrap();

            let snapshot = form.snapshot();
            assert_eq!(snapshot.entries().count(), 9);
            assert_eq!(snapshot.task, "");
            assert_eq!(snapshot.anecdotes, "value 7");
            assert_eq!(snapshot.tone, Tone::Conversational);
        }

        #[test]
        fn test_set_text_ignores_tone() {
            let mut form = FormController::default();
            form.set_text(FieldId::Tone, "Bold");
            assert_eq!(form.record().tone, Tone::Formal);
        }

        #[test]
        fn test_any_string_is_accepted() {
            let mut form = FormController::default();
            let odd = "  émoji 🚀\nline two\t";
            form.update(FieldId::Anecdotes, odd).unwrap();
            assert_eq!(form.record().anecdotes, odd);
        }
    }

    mod reset_and_snapshot {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = FormController::default();
            form.set_text(FieldId::Skills, "Rust, Go");
            form.set_text(FieldId::Passions, "climbing");
            form.set_tone(Tone::Enthusiastic);

            form.reset();

            assert_eq!(form.snapshot(), FormRecord::default());
        }

        #[test]
        fn test_reset_keeps_focus() {
            let mut form = FormController::default();
            form.set_focus(FormFocus::SubmitButton);
            form.reset();
            assert!(form.is_submit_focused());
        }

        #[test]
        fn test_snapshot_is_independent_copy() {
            let mut form = FormController::default();
            form.set_text(FieldId::Result, "Cut costs by 20%");
            let snapshot = form.snapshot();

            form.set_text(FieldId::Result, "changed");

            assert_eq!(snapshot.result, "Cut costs by 20%");
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_focus_is_first_field() {
            let form = FormController::default();
            assert_eq!(form.active_field(), Some(FieldId::Situation));
        }

        #[test]
        fn test_next_field_cycles_through_button() {
            let mut form = FormController::default();
            for _ in 0..FieldId::ALL.len() {
                form.next_field();
            }
            assert!(form.is_submit_focused());
            form.next_field();
            assert_eq!(form.active_field(), Some(FieldId::Situation));
        }

        #[test]
        fn test_prev_field_wraps_to_button() {
            let mut form = FormController::default();
            form.prev_field();
            assert!(form.is_submit_focused());
            form.prev_field();
            assert_eq!(form.active_field(), Some(FieldId::Tone));
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = FormController::default();
            form.set_focus(FormFocus::Field(FieldId::Task));
            form.push_char('o');
            form.push_char('k');
            form.pop_char();
            assert_eq!(form.record().task, "o");
        }

        #[test]
        fn test_typing_on_tone_or_button_is_noop() {
            let mut form = FormController::default();
            form.set_focus(FormFocus::Field(FieldId::Tone));
            form.push_char('x');
            form.pop_char();
            form.set_focus(FormFocus::SubmitButton);
            form.push_char('x');
            assert_eq!(form.snapshot(), FormRecord::default());
        }

        #[test]
        fn test_newline_only_in_text_areas() {
            let mut form = FormController::default();
            form.set_focus(FormFocus::Field(FieldId::Action));
            form.push_newline();
            form.set_focus(FormFocus::Field(FieldId::Skills));
            form.push_newline();
            assert_eq!(form.record().action, "\n");
            assert_eq!(form.record().skills, "");
        }

        #[test]
        fn test_tone_cycling() {
            let mut form = FormController::default();
            form.next_tone();
            assert_eq!(form.record().tone, Tone::Conversational);
            form.prev_tone();
            form.prev_tone();
            assert_eq!(form.record().tone, Tone::Enthusiastic);
        }
    }
}
