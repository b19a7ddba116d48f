//! Block-level and inline element kinds for the Markdown dialect.

/// The block-level classification of a source line, and the kind of the
/// container it ends up in. Every line classifies to exactly one kind;
/// `RawText` is the fallback, which makes classification total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    /// Indented code (one tab or four leading spaces). Verbatim.
    CodeBlock,
    /// `> ` prefixed quote lines.
    Quote,
    /// `1. ` style list lines, grouped into one `<ol>` container.
    OrderedList,
    /// `-`/`+`/`*` list lines, grouped into one `<ul>` container.
    UnorderedList,
    /// A single item inside a list container.
    ListItem,
    /// ATX heading carrying its level (always in `1..=6`).
    Heading(u8),
    /// Classifier fallback for plain prose lines. Rewritten to
    /// `Paragraph` when the block is flushed.
    RawText,
    /// A `[text](url)` line standing alone.
    Link,
    /// An `![alt](url)` line standing alone.
    Image,
    /// An empty line. Closes the open block, never produces a container.
    Blank,
}

impl BlockKind {
    /// One-liner kinds seal immediately and never accumulate lines.
    pub fn is_one_liner(self) -> bool {
        matches!(
            self,
            BlockKind::Heading(_) | BlockKind::Link | BlockKind::Image
        )
    }

    /// List containers wrap their lines as `ListItem` children.
    pub fn is_list(self) -> bool {
        matches!(self, BlockKind::OrderedList | BlockKind::UnorderedList)
    }

    /// Verbatim kinds are never run through inline extraction.
    pub fn is_verbatim(self) -> bool {
        matches!(self, BlockKind::CodeBlock)
    }
}

/// The kind of one inline span within a block's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    PlainText,
    Bold,
    Italic,
    InlineCode,
    Link,
    Image,
}
