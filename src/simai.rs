//! Parser for simai `maidata.txt` charts.
//!
//! Only what break statistics need is kept: the title, level strings and the
//! break/ex flags of every note. Timing is validated and then discarded.

mod note;

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::chart::{ChartData, ChartParser, FumenData, NoteEvent};
use crate::error::ParseError;

static DIFFICULTY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(inote|lv)_(.+)$").expect("valid difficulty key regex"));

const END_MARKER: &str = "E";

#[derive(Debug, Clone, Copy, Default)]
pub struct SimaiParser;

impl ChartParser for SimaiParser {
    fn parse(&self, content: &str) -> Result<ChartData, ParseError> {
        parse_chart(content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SlotKey {
    Index(u32),
    Named(String),
}

impl SlotKey {
    fn from_suffix(suffix: &str) -> Self {
        match suffix.parse::<u32>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Named(suffix.to_string()),
        }
    }

    fn difficulty_index(&self) -> Option<u32> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Named(_) => None,
        }
    }

    fn chart_key(&self) -> String {
        match self {
            Self::Index(index) => format!("inote_{}", index),
            Self::Named(name) => format!("inote_{}", name),
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    body: Option<String>,
    level: Option<String>,
}

pub fn parse_chart(content: &str) -> Result<ChartData, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut title = None;
    let mut slots: BTreeMap<SlotKey, Slot> = BTreeMap::new();

    for (key, value) in split_fields(content) {
        if key == "title" {
            title = non_empty(&value);
            continue;
        }

        let Some(captures) = DIFFICULTY_KEY.captures(&key) else {
            continue;
        };

        let slot = slots
            .entry(SlotKey::from_suffix(&captures[2]))
            .or_default();

        if &captures[1] == "inote" {
            slot.body = Some(value);
        } else {
            slot.level = non_empty(&value);
        }
    }

    let mut fumens = Vec::with_capacity(slots.len());

    for (key, slot) in slots {
        let note_events = match &slot.body {
            Some(body) => parse_body(&key.chart_key(), body)?,
            None => Vec::new(),
        };

        fumens.push(FumenData {
            difficulty_index: key.difficulty_index(),
            level_info: slot.level,
            note_events,
        });
    }

    Ok(ChartData { title, fumens })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn split_fields(content: &str) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in content.lines() {
        if let Some(rest) = line.trim_start().strip_prefix('&') {
            if let Some(field) = current.take() {
                fields.push(field);
            }
            let (key, value) = rest.split_once('=').unwrap_or((rest, ""));
            current = Some((key.trim().to_string(), value.to_string()));
        } else if let Some((_, value)) = current.as_mut() {
            value.push('\n');
            value.push_str(line);
        }
    }

    if let Some(field) = current {
        fields.push(field);
    }

    fields
}

fn strip_comments_and_whitespace(body: &str) -> String {
    body.lines()
        .map(|line| line.split_once("||").map_or(line, |(code, _)| code))
        .flat_map(|line| line.chars().filter(|c| !c.is_whitespace()))
        .collect()
}

fn parse_body(key: &str, body: &str) -> Result<Vec<NoteEvent>, ParseError> {
    let cleaned = strip_comments_and_whitespace(body);
    let mut events = Vec::new();

    for token in cleaned.split(',') {
        let remainder = strip_timing_prefixes(key, token)?;

        if remainder.is_empty() {
            continue;
        }
        if remainder == END_MARKER {
            break;
        }

        let event = note::parse_event(key, remainder)?;
        if !event.notes.is_empty() {
            events.push(event);
        }
    }

    Ok(events)
}

fn strip_timing_prefixes<'a>(key: &str, token: &'a str) -> Result<&'a str, ParseError> {
    let mut rest = token;

    loop {
        if let Some(inner) = rest.strip_prefix('(') {
            let (value, after) = close(key, token, inner, '(', ')')?;
            if value.parse::<f64>().is_err() {
                return Err(ParseError::InvalidBpm {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
            rest = after;
        } else if let Some(inner) = rest.strip_prefix('{') {
            let (value, after) = close(key, token, inner, '{', '}')?;
            let number = value.strip_prefix('#').unwrap_or(value);
            if number.parse::<f64>().is_err() {
                return Err(ParseError::InvalidDivision {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
            rest = after;
        } else if let Some(inner) = rest.strip_prefix("<HS*") {
            let (_, after) = close(key, token, inner, '<', '>')?;
            rest = after;
        } else {
            return Ok(rest);
        }
    }
}

fn close<'a>(
    key: &str,
    token: &str,
    inner: &'a str,
    open: char,
    closing: char,
) -> Result<(&'a str, &'a str), ParseError> {
    inner
        .split_once(closing)
        .ok_or_else(|| ParseError::Unbalanced {
            key: key.to_string(),
            open,
            token: token.to_string(),
        })
}
