//! Column-accurate text layout for terminal tables.
//!
//! Widths follow `unicode-width`: wide (CJK) characters take two columns,
//! combining marks take none. A string containing any character without a
//! defined width (control characters) is measured by character count instead.

use unicode_width::UnicodeWidthChar;

pub const ELLIPSIS: &str = "...";

const ELLIPSIS_WIDTH: usize = 3;

fn has_undefined_width(text: &str) -> bool {
    text.chars().any(|ch| ch.width().is_none())
}

pub fn display_width(text: &str) -> usize {
    let mut total = 0usize;

    for ch in text.chars() {
        match ch.width() {
            Some(width) => total += width,
            None => return text.chars().count(),
        }
    }

    total
}

pub fn pad_to(text: &str, target: usize) -> String {
    let width = display_width(text);
    if width >= target {
        return text.to_string();
    }

    let mut padded = String::with_capacity(text.len() + target - width);
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', target - width));
    padded
}

/// Cuts `text` so it fits in `budget` columns, ending with [`ELLIPSIS`].
///
/// Text that already fits is returned as is. Budgets below the ellipsis width
/// still yield the bare ellipsis.
pub fn truncate_to_width(text: &str, budget: usize) -> String {
    if display_width(text) <= budget {
        return text.to_string();
    }

    let degraded = has_undefined_width(text);
    let limit = budget.saturating_sub(ELLIPSIS_WIDTH);

    let mut used = 0usize;
    let mut end = 0usize;

    for (index, ch) in text.char_indices() {
        let width = if degraded { 1 } else { ch.width().unwrap_or(0) };
        if used + width > limit {
            break;
        }
        used += width;
        end = index + ch.len_utf8();
    }

    let mut truncated = String::with_capacity(end + ELLIPSIS.len());
    truncated.push_str(&text[..end]);
    truncated.push_str(ELLIPSIS);
    truncated
}
