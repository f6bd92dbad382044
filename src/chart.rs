//! Read-only view of a parsed chart, as consumed by the metric extractor.

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Note {
    pub is_break: bool,
    pub is_ex: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEvent {
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FumenData {
    pub difficulty_index: Option<u32>,
    pub level_info: Option<String>,
    pub note_events: Vec<NoteEvent>,
}

impl FumenData {
    pub fn is_authored(&self) -> bool {
        !self.note_events.is_empty() || self.level_info.is_some()
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.note_events.iter().flat_map(|event| event.notes.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub title: Option<String>,
    pub fumens: Vec<FumenData>,
}

pub trait ChartParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<ChartData, ParseError>;
}
