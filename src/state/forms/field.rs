//! Form field identifiers and their display metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FormError;

/// Section of the form a field is grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    StarStory,
    Personality,
    AiConfiguration,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::StarStory,
        Section::Personality,
        Section::AiConfiguration,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::StarStory => "STAR Story Database",
            Self::Personality => "Personality Module",
            Self::AiConfiguration => "AI Configuration",
        }
    }

    /// Optional one-line description shown under the section title
    pub fn blurb(&self) -> Option<&'static str> {
        match self {
            Self::StarStory => Some("Add a professional experience using the STAR method."),
            Self::Personality | Self::AiConfiguration => None,
        }
    }

    /// Fields in this section, in display order
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::ALL.into_iter().filter(move |f| f.section() == *self)
    }
}

/// Identifier of one field of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Situation,
    Task,
    Action,
    Result,
    Skills,
    CoreValues,
    Passions,
    Anecdotes,
    Tone,
}

impl FieldId {
    /// Every field, in display order
    pub const ALL: [FieldId; 9] = [
        FieldId::Situation,
        FieldId::Task,
        FieldId::Action,
        FieldId::Result,
        FieldId::Skills,
        FieldId::CoreValues,
        FieldId::Passions,
        FieldId::Anecdotes,
        FieldId::Tone,
    ];

    /// Key used for this field in the stored document
    pub fn name(&self) -> &'static str {
        match self {
            Self::Situation => "situation",
            Self::Task => "task",
            Self::Action => "action",
            Self::Result => "result",
            Self::Skills => "skills",
            Self::CoreValues => "coreValues",
            Self::Passions => "passions",
            Self::Anecdotes => "anecdotes",
            Self::Tone => "tone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Situation => "Situation",
            Self::Task => "Task",
            Self::Action => "Action",
            Self::Result => "Result",
            Self::Skills => "Skill Tags",
            Self::CoreValues => "My Core Values",
            Self::Passions => "My Passions",
            Self::Anecdotes => "Defining Anecdotes",
            Self::Tone => "Writing Tone",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Situation => "Describe the context. Where and when did this take place?",
            Self::Task => "What was your specific goal or responsibility?",
            Self::Action => "What specific steps did YOU take to address the task?",
            Self::Result => "What was the outcome? Use numbers and data where possible.",
            Self::Skills => {
                "e.g., Python, Project Management, Team Leadership (comma-separated)"
            }
            Self::CoreValues => "What principles guide you? (e.g., Integrity, Continuous Learning)",
            Self::Passions => "What are you genuinely excited about, inside or outside of work?",
            Self::Anecdotes => "Short stories that reveal your character or work ethic.",
            Self::Tone => "",
        }
    }

    /// Text areas accept newlines; inputs and the tone selector do not
    pub fn is_multiline(&self) -> bool {
        !matches!(self, Self::Skills | Self::Tone)
    }

    pub fn is_tone(&self) -> bool {
        matches!(self, Self::Tone)
    }

    pub fn section(&self) -> Section {
        match self {
            Self::Situation | Self::Task | Self::Action | Self::Result | Self::Skills => {
                Section::StarStory
            }
            Self::CoreValues | Self::Passions | Self::Anecdotes => Section::Personality,
            Self::Tone => Section::AiConfiguration,
        }
    }

    /// Position of this field in [`FieldId::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Writing tone offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Formal,
    Conversational,
    Bold,
    Enthusiastic,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Formal,
        Tone::Conversational,
        Tone::Bold,
        Tone::Enthusiastic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Conversational => "Conversational",
            Self::Bold => "Bold",
            Self::Enthusiastic => "Enthusiastic",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Formal => Self::Conversational,
            Self::Conversational => Self::Bold,
            Self::Bold => Self::Enthusiastic,
            Self::Enthusiastic => Self::Formal,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Formal => Self::Enthusiastic,
            Self::Conversational => Self::Formal,
            Self::Bold => Self::Conversational,
            Self::Enthusiastic => Self::Bold,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| FormError::UnknownTone(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for field in FieldId::ALL {
            assert_eq!(field.name().parse::<FieldId>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let err = "coreValue".parse::<FieldId>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref name) if name == "coreValue"));
    }

    #[test]
    fn test_field_names_are_camel_case() {
        assert_eq!(FieldId::CoreValues.name(), "coreValues");
        assert_eq!(FieldId::Tone.to_string(), "tone");
    }

    #[test]
    fn test_index_matches_position() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_multiline_fields() {
        assert!(FieldId::Situation.is_multiline());
        assert!(FieldId::Anecdotes.is_multiline());
        assert!(!FieldId::Skills.is_multiline());
        assert!(!FieldId::Tone.is_multiline());
    }

    #[test]
    fn test_sections_cover_every_field_once() {
        let total: usize = Section::ALL.iter().map(|s| s.fields().count()).sum();
        assert_eq!(total, FieldId::ALL.len());
        assert_eq!(Section::StarStory.fields().count(), 5);
        assert_eq!(Section::Personality.fields().count(), 3);
        assert_eq!(
            Section::AiConfiguration.fields().collect::<Vec<_>>(),
            vec![FieldId::Tone]
        );
    }

    #[test]
    fn test_tone_default_is_formal() {
        assert_eq!(Tone::default(), Tone::Formal);
    }

    #[test]
    fn test_tone_cycles_both_ways() {
        let mut tone = Tone::Formal;
        for _ in 0..Tone::ALL.len() {
            tone = tone.next();
        }
        assert_eq!(tone, Tone::Formal);
        assert_eq!(Tone::Formal.prev(), Tone::Enthusiastic);
        assert_eq!(Tone::Bold.prev().next(), Tone::Bold);
    }

    #[test]
    fn test_tone_parse_is_exact() {
        assert_eq!("Bold".parse::<Tone>().unwrap(), Tone::Bold);
        assert!("bold".parse::<Tone>().is_err());
        assert!("".parse::<Tone>().is_err());
    }

    #[test]
    fn test_tone_serializes_as_label() {
        let json = serde_json::to_string(&Tone::Enthusiastic).unwrap();
        assert_eq!(json, "\"Enthusiastic\"");
    }
}
