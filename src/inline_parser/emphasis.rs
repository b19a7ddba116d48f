//! Parsing for bold (`**`/`__`) and italic (`*`/`_`) spans.
//!
//! Spans are non-nested and non-overlapping: the first complete match
//! wins, and the closer must repeat the opener's character. A doubled
//! opener without a doubled closer stays literal rather than falling
//! back to italic.

use crate::syntax::InlineKind;

/// Try to parse an emphasis span starting at the current position.
///
/// Returns `Some((consumed_len, content, kind))` where kind is `Bold`
/// for a doubled delimiter and `Italic` for a single one.
pub fn try_parse_emphasis(text: &str) -> Option<(usize, &str, InlineKind)> {
    let delim = text.chars().next()?;
    if delim != '*' && delim != '_' {
        return None;
    }

    let run = text.chars().take_while(|&c| c == delim).count();
    if run >= 2 {
        return try_close(text, delim, 2).map(|(len, content)| (len, content, InlineKind::Bold));
    }
    try_close(text, delim, 1).map(|(len, content)| (len, content, InlineKind::Italic))
}

/// Find the matching closer of `width` delimiter characters. The span
/// must have non-empty content.
fn try_close(text: &str, delim: char, width: usize) -> Option<(usize, &str)> {
    let marker = delim.to_string().repeat(width);
    let rest = &text[width..];
    let close = rest.find(&marker)?;
    if close == 0 {
        return None;
    }
    Some((width + close + width, &rest[..close]))
}
