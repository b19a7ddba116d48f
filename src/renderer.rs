//! HTML rendering for assembled containers.
//!
//! Each block kind has a fixed template and dispatch is an exhaustive
//! match, so adding a kind forces a template decision here. Raw text is
//! escaped for element context, destinations for attribute context.

use crate::config::Config;
use crate::syntax::{Block, BlockKind, Inline, InlineKind};

/// Escape text for HTML element or double-quoted attribute context.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render one inline node into its HTML form.
pub fn render_inline(node: &Inline) -> String {
    let text = escape_html(&node.text);
    match node.kind {
        InlineKind::PlainText => text,
        InlineKind::Bold => format!("<strong>{text}</strong>"),
        InlineKind::Italic => format!("<em>{text}</em>"),
        InlineKind::InlineCode => format!("<code>{text}</code>"),
        InlineKind::Link => {
            let url = escape_html(node.url.as_deref().unwrap_or_default());
            format!("<a href=\"{url}\">{text}</a>")
        }
        InlineKind::Image => {
            let url = escape_html(node.url.as_deref().unwrap_or_default());
            format!("<img src=\"{url}\" alt=\"{text}\">")
        }
    }
}

fn render_inlines(nodes: &[Inline]) -> String {
    nodes.iter().map(render_inline).collect()
}

/// Render one sealed container into an HTML fragment.
pub fn render_block(block: &Block) -> String {
    match block.kind {
        BlockKind::Paragraph => {
            format!("<p>\n{}\n</p>", render_inlines(&block.inlines))
        }
        BlockKind::Quote => {
            format!("<blockquote>\n{}\n</blockquote>", render_inlines(&block.inlines))
        }
        BlockKind::CodeBlock => {
            // Verbatim: escaped source lines, no inline rendering.
            format!(
                "<pre><code>\n{}\n</code></pre>",
                escape_html(&block.raw_lines.join("\n"))
            )
        }
        BlockKind::Heading(level) => {
            let text = render_inlines(&block.inlines);
            format!("<h{level}>\n{text}\n</h{level}>")
        }
        BlockKind::UnorderedList => {
            format!("<ul>\n{}\n</ul>", render_items(&block.children))
        }
        BlockKind::OrderedList => {
            format!("<ol>\n{}\n</ol>", render_items(&block.children))
        }
        BlockKind::ListItem => {
            format!("<li>\n{}\n</li>", render_inlines(&block.inlines))
        }
        // Bare links and images render their extracted node unwrapped.
        BlockKind::Link | BlockKind::Image => render_inlines(&block.inlines),
        // Fallback label; flush rewrites it to Paragraph, so this arm
        // only serves hand-built containers.
        BlockKind::RawText => render_inlines(&block.inlines),
        BlockKind::Blank => String::new(),
    }
}

fn render_items(items: &[Block]) -> String {
    items.iter().map(render_block).collect::<Vec<_>>().join("\n")
}

/// Render a whole document: one fragment per container, joined per the
/// configured separator.
pub fn render_document(blocks: &[Block], config: &Config) -> String {
    let fragments: Vec<String> = blocks.iter().map(render_block).collect();
    let mut out = fragments.join(config.block_separator.as_str());
    if config.trailing_newline && !out.is_empty() {
        out.push('\n');
    }
    out
}
