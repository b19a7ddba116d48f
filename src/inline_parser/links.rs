//! Parsing for inline links (`[text](url)`) and images (`![alt](url)`).

/// Try to parse an inline link starting at the current position.
///
/// Returns `Some((consumed_len, text, url))` for a complete
/// `[text](url)` with non-empty text and destination. Anything else
/// (unterminated brackets, parens not immediately following, an empty
/// part) is left for the plain-text path, so a partially-populated
/// node can never be produced.
pub fn try_parse_inline_link(text: &str) -> Option<(usize, &str, &str)> {
    if !text.starts_with('[') {
        return None;
    }

    let close_bracket = text[1..].find(']').map(|i| i + 1)?;
    let label = &text[1..close_bracket];

    // The destination must open immediately after the closing bracket.
    let after_bracket = close_bracket + 1;
    if !text[after_bracket..].starts_with('(') {
        return None;
    }

    let dest_start = after_bracket + 1;
    let close_paren = text[dest_start..].find(')').map(|i| i + dest_start)?;
    let dest = &text[dest_start..close_paren];

    if label.is_empty() || dest.is_empty() {
        return None;
    }

    Some((close_paren + 1, label, dest))
}

/// Try to parse an inline image starting at the current position.
///
/// The image form is the link form prefixed with `!`; the same
/// completeness rules apply.
pub fn try_parse_inline_image(text: &str) -> Option<(usize, &str, &str)> {
    let rest = text.strip_prefix('!')?;
    let (len, alt, url) = try_parse_inline_link(rest)?;
    Some((len + 1, alt, url))
}
