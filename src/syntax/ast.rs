//! Node types for the assembled document tree.

use super::kind::{BlockKind, InlineKind};

/// One inline span: display text plus, for links and images, the
/// destination URL. Produced only by the inline extractor and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub kind: InlineKind,
    pub text: String,
    /// Destination, present exactly when `kind` is `Link` or `Image`.
    pub url: Option<String>,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: InlineKind::PlainText,
            text: text.into(),
            url: None,
        }
    }

    pub fn styled(kind: InlineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: InlineKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: InlineKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }
}

/// One finalized block container.
///
/// Created when the assembler opens a block on a classification change;
/// content lines are appended while the classification persists; sealed
/// at the next boundary. Inline nodes are attached once, after sealing.
/// List containers carry their items as `children` instead of inlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub raw_lines: Vec<String>,
    pub inlines: Vec<Inline>,
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(kind: BlockKind, raw_lines: Vec<String>) -> Self {
        Self {
            kind,
            raw_lines,
            inlines: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The container's text as handed to the inline extractor: content
    /// lines joined with a single space. Code blocks keep their literal
    /// lines and never go through extraction.
    pub fn joined_text(&self) -> String {
        self.raw_lines.join(" ")
    }
}
