//! Small text helpers for display contracts.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Character budget for project summaries on cards.
pub const SUMMARY_CHAR_BUDGET: usize = 100;

/// Appended when a summary is cut.
pub const ELLIPSIS: char = '\u{2026}';

/// Cut `text` to at most `budget` characters, appending [`ELLIPSIS`] when
/// anything was removed. Counts `char`s, not bytes.
#[must_use]
pub fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len_utf8());
            out.push_str(&text[..cut]);
            out.push(ELLIPSIS);
            out
        }
        None => text.to_owned(),
    }
}

/// Parse a project id from a `data-id` attribute value.
///
/// Accepts leading whitespace, an optional `+` and then reads leading ASCII
/// digits, ignoring anything after them (`"12abc"` is `12`). Returns `None`
/// when no digits lead or the value overflows `u32`.
#[must_use]
pub fn parse_leading_id(raw: &str) -> Option<u32> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse().ok()
}
