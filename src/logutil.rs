//! Keeps API-sourced text (flavor text, error bodies) on one log line.

/// Longest preview written to a log line, in characters.
const MAX_PREVIEW: usize = 160;

/// Render `s` as a single line: line breaks, tabs and form-feeds become visible
/// escapes, other control characters become `\u{..}`, and anything past
/// [`MAX_PREVIEW`] characters is cut with an ellipsis.
pub fn single_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_PREVIEW) {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}
