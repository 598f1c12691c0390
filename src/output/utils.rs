//! Shared output helpers

/// Escape text for use in HTML element content and single- or double-quoted
/// attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Leading whitespace for console output, two spaces per level.
pub fn text_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
