use crate::chart::{Note, NoteEvent};
use crate::error::ParseError;

const SLIDE_SHAPES: &[char] = &['-', '>', '<', '^', 'v', 'p', 'q', 's', 'z', 'w', 'V'];

const BREAK_FLAG: char = 'b';
const EX_FLAG: char = 'x';
const NO_STAR_FLAGS: &[char] = &['?', '!'];

pub(super) fn parse_event(key: &str, text: &str) -> Result<NoteEvent, ParseError> {
    let mut notes = Vec::new();

    for group in text.split(['/', '`']) {
        if group.is_empty() {
            continue;
        }

        if group.len() >= 2 && group.bytes().all(|b| b.is_ascii_digit()) {
            for digit in group.chars() {
                if !is_button(digit) {
                    return Err(invalid_button(key, group));
                }
                notes.push(Note::default());
            }
            continue;
        }

        parse_note(key, group, &mut notes)?;
    }

    Ok(NoteEvent { notes })
}

fn is_button(ch: char) -> bool {
    ('1'..='8').contains(&ch)
}

fn invalid_button(key: &str, token: &str) -> ParseError {
    ParseError::InvalidButton {
        key: key.to_string(),
        token: token.to_string(),
    }
}

fn invalid_sensor(key: &str, token: &str) -> ParseError {
    ParseError::InvalidSensor {
        key: key.to_string(),
        token: token.to_string(),
    }
}

fn parse_note(key: &str, text: &str, notes: &mut Vec<Note>) -> Result<(), ParseError> {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };

    match first {
        '1'..='8' => parse_button_note(key, text, &text[1..], notes),
        '0' | '9' => Err(invalid_button(key, text)),
        'A' | 'B' | 'D' | 'E' => match chars.next() {
            Some(area) if is_button(area) => parse_touch_note(key, text, &text[2..], notes),
            _ => Err(invalid_sensor(key, text)),
        },
        'C' => match chars.next() {
            Some('1' | '2') => parse_touch_note(key, text, &text[2..], notes),
            Some(ch) if ch.is_ascii_digit() => Err(invalid_sensor(key, text)),
            _ => parse_touch_note(key, text, &text[1..], notes),
        },
        _ => Err(ParseError::UnknownNote {
            key: key.to_string(),
            token: text.to_string(),
        }),
    }
}

fn parse_touch_note(
    key: &str,
    token: &str,
    modifiers: &str,
    notes: &mut Vec<Note>,
) -> Result<(), ParseError> {
    let flags = strip_durations(key, token, modifiers)?;
    notes.push(Note {
        is_break: flags.contains(BREAK_FLAG),
        is_ex: flags.contains(EX_FLAG),
    });
    Ok(())
}

fn parse_button_note(
    key: &str,
    token: &str,
    rest: &str,
    notes: &mut Vec<Note>,
) -> Result<(), ParseError> {
    let rest = strip_durations(key, token, rest)?;

    let (head, slide) = match rest.find(SLIDE_SHAPES) {
        Some(split) => rest.split_at(split),
        None => (rest.as_str(), ""),
    };

    let head_note = Note {
        is_break: head.contains(BREAK_FLAG),
        is_ex: head.contains(EX_FLAG),
    };

    if slide.is_empty() {
        notes.push(head_note);
        return Ok(());
    }

    if !head.contains(NO_STAR_FLAGS) {
        notes.push(head_note);
    }

    for path in slide.split('*').filter(|path| !path.is_empty()) {
        notes.push(Note {
            is_break: path.contains(BREAK_FLAG),
            is_ex: false,
        });
    }

    Ok(())
}

/// Removes `[...]` duration blocks so their contents are never read as flags.
fn strip_durations(key: &str, token: &str, text: &str) -> Result<String, ParseError> {
    let mut stripped = String::with_capacity(text.len());
    let mut depth = 0usize;

    for ch in text.chars() {
        match ch {
            '[' => depth += 1,
            ']' if depth > 0 => depth -= 1,
            _ if depth == 0 => stripped.push(ch),
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ParseError::Unbalanced {
            key: key.to_string(),
            open: '[',
            token: token.to_string(),
        });
    }

    Ok(stripped)
}
