//! Inline extraction: scans a sealed block's text for links, images,
//! code spans, and emphasis.
//!
//! The scan is left to right with a fixed priority at each position:
//! image, link, code span, bold, italic. The first complete match
//! consumes its delimiters and content; spans never overlap or nest.
//! Anything unterminated or malformed stays literal text, delimiters
//! included. Plain characters accumulate into a single run, flushed
//! only when an element matches or the text ends.

mod code_spans;
mod emphasis;
mod links;

use crate::syntax::{Block, Inline, InlineKind};

use code_spans::try_parse_code_span;
use emphasis::try_parse_emphasis;
use links::{try_parse_inline_image, try_parse_inline_link};

/// Attach inline nodes to a sealed container. Code blocks are verbatim
/// and left untouched; list containers extract per item.
pub fn attach_inlines(block: &mut Block) {
    if block.kind.is_verbatim() {
        return;
    }
    if block.kind.is_list() {
        for item in &mut block.children {
            item.inlines = extract_inlines(&item.joined_text());
        }
        return;
    }
    block.inlines = extract_inlines(&block.joined_text());
}

/// Extract the ordered inline node sequence from a sealed container's
/// joined text.
pub fn extract_inlines(text: &str) -> Vec<Inline> {
    let mut nodes: Vec<Inline> = Vec::new();
    let mut plain = String::new();
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < text.len() {
        // Image before link: the image pattern is the link pattern
        // prefixed with `!`.
        if bytes[pos] == b'!'
            && pos + 1 < text.len()
            && bytes[pos + 1] == b'['
            && let Some((len, alt, url)) = try_parse_inline_image(&text[pos..])
        {
            log::debug!("Matched image at pos {}: url={}", pos, url);
            flush_plain(&mut nodes, &mut plain);
            nodes.push(Inline::image(alt, url));
            pos += len;
            continue;
        }

        if bytes[pos] == b'['
            && let Some((len, label, url)) = try_parse_inline_link(&text[pos..])
        {
            log::debug!("Matched link at pos {}: url={}", pos, url);
            flush_plain(&mut nodes, &mut plain);
            nodes.push(Inline::link(label, url));
            pos += len;
            continue;
        }

        if bytes[pos] == b'`'
            && let Some((len, content)) = try_parse_code_span(&text[pos..])
        {
            log::debug!("Matched code span at pos {}", pos);
            flush_plain(&mut nodes, &mut plain);
            nodes.push(Inline::styled(InlineKind::InlineCode, content));
            pos += len;
            continue;
        }

        if (bytes[pos] == b'*' || bytes[pos] == b'_')
            && let Some((len, content, kind)) = try_parse_emphasis(&text[pos..])
        {
            log::debug!("Matched {:?} at pos {}", kind, pos);
            flush_plain(&mut nodes, &mut plain);
            nodes.push(Inline::styled(kind, content));
            pos += len;
            continue;
        }

        // No element starts here: the character joins the plain run.
        let Some(ch) = text[pos..].chars().next() else {
            break;
        };
        plain.push(ch);
        pos += ch.len_utf8();
    }

    flush_plain(&mut nodes, &mut plain);
    nodes
}

/// Close the current plain-text run, if any. Keeping the run open
/// across unmatched delimiters is what guarantees consecutive plain
/// text is never split into artificial nodes.
fn flush_plain(nodes: &mut Vec<Inline>, plain: &mut String) {
    if !plain.is_empty() {
        nodes.push(Inline::plain(std::mem::take(plain)));
    }
}
