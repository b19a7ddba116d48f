//! Block assembly: groups classified lines into sealed containers.
//!
//! One pass over the line sequence with two state variables: the kind
//! of the open block and its accumulated content lines. One-liner kinds
//! (headings, bare links, bare images) seal immediately; a blank line
//! closes the open block and is discarded; a classification change
//! closes the open block and opens a new one. The loop is index-driven,
//! so a file without a trailing newline still flushes its last block.

use crate::classifier::classify;
use crate::syntax::{Block, BlockKind};

pub struct BlockAssembler<'a> {
    lines: Vec<&'a str>,
    current_kind: BlockKind,
    current_lines: Vec<String>,
    output: Vec<Block>,
}

impl<'a> BlockAssembler<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::from_lines(input.lines().collect())
    }

    /// Build from an already-split line sequence (no line terminators).
    pub fn from_lines(lines: Vec<&'a str>) -> Self {
        Self {
            lines,
            current_kind: BlockKind::Blank,
            current_lines: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Run the scan and return the sealed containers in source order.
    pub fn assemble(mut self) -> Vec<Block> {
        for pos in 0..self.lines.len() {
            let line = self.lines[pos];
            let kind = classify(line);

            log::trace!("line {}: {:?}: {:?}", pos + 1, kind, line);

            if kind.is_one_liner() {
                self.flush();
                log::debug!("sealing one-liner {:?} at line {}", kind, pos + 1);
                self.output.push(Block::new(kind, vec![content_of(kind, line)]));
                continue;
            }

            if kind == BlockKind::Blank {
                self.flush();
                continue;
            }

            if kind != self.current_kind {
                self.flush();
                self.current_kind = kind;
            }
            self.current_lines.push(content_of(kind, line));
        }

        // A final open block means the file did not end with a blank
        // line; flush it like any other boundary.
        self.flush();
        self.output
    }

    /// Seal the open block, if any, and reset the accumulator state.
    fn flush(&mut self) {
        if self.current_kind == BlockKind::Blank || self.current_lines.is_empty() {
            self.current_kind = BlockKind::Blank;
            self.current_lines.clear();
            return;
        }

        // The fallback label is not a renderable kind of its own:
        // accumulated plain lines are paragraph content.
        let kind = match self.current_kind {
            BlockKind::RawText => BlockKind::Paragraph,
            other => other,
        };

        let lines = std::mem::take(&mut self.current_lines);
        log::debug!("sealing {:?} with {} line(s)", kind, lines.len());

        let mut block = Block::new(kind, lines);
        if kind.is_list() {
            block.children = block
                .raw_lines
                .iter()
                .map(|item| Block::new(BlockKind::ListItem, vec![item.clone()]))
                .collect();
        }

        self.output.push(block);
        self.current_kind = BlockKind::Blank;
    }
}

/// The text a line contributes to its container, marker stripped.
/// Paragraph lines are stored verbatim; code lines lose one level of
/// indent but keep the rest of their leading whitespace.
fn content_of(kind: BlockKind, line: &str) -> String {
    let trimmed = line.trim();
    match kind {
        BlockKind::Quote => trimmed.strip_prefix("> ").unwrap_or(trimmed).to_string(),
        BlockKind::UnorderedList => trimmed.get(2..).unwrap_or_default().to_string(),
        BlockKind::OrderedList => {
            let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
            trimmed.get(digits + 2..).unwrap_or_default().to_string()
        }
        BlockKind::CodeBlock => line
            .strip_prefix('\t')
            .or_else(|| line.strip_prefix("    "))
            .unwrap_or(line)
            .to_string(),
        BlockKind::Heading(level) => trimmed[level as usize..].trim().to_string(),
        BlockKind::Link | BlockKind::Image => trimmed.to_string(),
        _ => line.to_string(),
    }
}
