//! Parsing for inline code spans delimited by single backticks.

/// Try to parse a code span starting at the current position.
///
/// Returns `Some((consumed_len, content))` when the span closes before
/// the end of the text; an unterminated or empty span is left to the
/// plain-text path.
pub fn try_parse_code_span(text: &str) -> Option<(usize, &str)> {
    let rest = text.strip_prefix('`')?;
    let close = rest.find('`')?;
    if close == 0 {
        return None;
    }
    Some((close + 2, &rest[..close]))
}
