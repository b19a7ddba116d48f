//! Line classification: maps one source line to its block kind.
//!
//! The rules live in a fixed, ordered list and are evaluated
//! first-match-wins. Order is load-bearing: the image pattern is the
//! link pattern prefixed with `!` and must be checked first, blank must
//! precede everything, and `RawText` is the final fallback that makes
//! classification total over all inputs.

use std::sync::LazyLock;

use regex::Regex;

use crate::syntax::BlockKind;

/// `![alt](url)` spanning the whole trimmed line, both parts non-empty.
static IMAGE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^!\[.+\]\(.+\)$").unwrap());

/// `[text](url)` spanning the whole trimmed line, both parts non-empty.
static LINK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[.+\]\(.+\)$").unwrap());

/// The classification rules, in priority order. Each rule sees the
/// original line (with the terminator already stripped) and trims it
/// as needed; the indented-code rule is the one that must look at the
/// untrimmed leading whitespace.
const RULES: &[fn(&str) -> Option<BlockKind>] = &[
    classify_blank,
    classify_image,
    classify_link,
    classify_heading,
    classify_quote,
    classify_ordered_item,
    classify_unordered_item,
    classify_indented_code,
];

/// Classify one source line. Total: every line maps to exactly one
/// kind, with `RawText` as the fallback for anything unmatched.
pub fn classify(line: &str) -> BlockKind {
    for rule in RULES {
        if let Some(kind) = rule(line) {
            return kind;
        }
    }
    BlockKind::RawText
}

fn classify_blank(line: &str) -> Option<BlockKind> {
    line.trim().is_empty().then_some(BlockKind::Blank)
}

fn classify_image(line: &str) -> Option<BlockKind> {
    IMAGE_LINE.is_match(line.trim()).then_some(BlockKind::Image)
}

fn classify_link(line: &str) -> Option<BlockKind> {
    LINK_LINE.is_match(line.trim()).then_some(BlockKind::Link)
}

fn classify_heading(line: &str) -> Option<BlockKind> {
    let trimmed = line.trim();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = trimmed[hashes..].strip_prefix(' ')?;
    if rest.trim().is_empty() {
        return None;
    }
    Some(BlockKind::Heading(hashes as u8))
}

fn classify_quote(line: &str) -> Option<BlockKind> {
    let rest = line.trim().strip_prefix("> ")?;
    if rest.trim().is_empty() {
        return None;
    }
    Some(BlockKind::Quote)
}

fn classify_ordered_item(line: &str) -> Option<BlockKind> {
    let trimmed = line.trim();
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix(". ")?;
    if rest.trim().is_empty() {
        return None;
    }
    Some(BlockKind::OrderedList)
}

fn classify_unordered_item(line: &str) -> Option<BlockKind> {
    let trimmed = line.trim();
    if !matches!(trimmed.chars().next(), Some('-') | Some('+') | Some('*')) {
        return None;
    }
    let rest = trimmed[1..].strip_prefix(' ')?;
    if rest.trim().is_empty() {
        return None;
    }
    Some(BlockKind::UnorderedList)
}

fn classify_indented_code(line: &str) -> Option<BlockKind> {
    // Blank already matched whitespace-only lines, so any line that
    // reaches this rule with code indentation has content.
    (line.starts_with('\t') || line.starts_with("    ")).then_some(BlockKind::CodeBlock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(classify(""), BlockKind::Blank);
        assert_eq!(classify("   "), BlockKind::Blank);
        assert_eq!(classify("\t"), BlockKind::Blank);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("# Title"), BlockKind::Heading(1));
        assert_eq!(classify("### Three"), BlockKind::Heading(3));
        assert_eq!(classify("###### x"), BlockKind::Heading(6));
    }

    #[test]
    fn test_seven_hashes_is_not_a_heading() {
        assert_eq!(classify("####### x"), BlockKind::RawText);
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        assert_eq!(classify("#NoSpace"), BlockKind::RawText);
    }

    #[test]
    fn test_empty_heading_is_not_a_heading() {
        assert_eq!(classify("# "), BlockKind::RawText);
    }

    #[test]
    fn test_quote() {
        assert_eq!(classify("> a quote"), BlockKind::Quote);
        assert_eq!(classify(">no space"), BlockKind::RawText);
    }

    #[test]
    fn test_unordered_list_markers() {
        assert_eq!(classify("- item"), BlockKind::UnorderedList);
        assert_eq!(classify("+ item"), BlockKind::UnorderedList);
        assert_eq!(classify("* item"), BlockKind::UnorderedList);
        assert_eq!(classify("-item"), BlockKind::RawText);
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(classify("1. first"), BlockKind::OrderedList);
        assert_eq!(classify("12. twelfth"), BlockKind::OrderedList);
        assert_eq!(classify("1.no space"), BlockKind::RawText);
    }

    #[test]
    fn test_indented_code() {
        assert_eq!(classify("    let x = 1;"), BlockKind::CodeBlock);
        assert_eq!(classify("\tlet x = 1;"), BlockKind::CodeBlock);
        assert_eq!(classify("   three spaces"), BlockKind::RawText);
    }

    #[test]
    fn test_image_checked_before_link() {
        assert_eq!(classify("![alt](http://x)"), BlockKind::Image);
        assert_eq!(classify("[alt](http://x)"), BlockKind::Link);
    }

    #[test]
    fn test_link_must_span_whole_line() {
        assert_eq!(classify("see [alt](http://x)"), BlockKind::RawText);
    }

    #[test]
    fn test_malformed_link_falls_through() {
        // Empty alt or destination degrades to a paragraph line.
        assert_eq!(classify("[](http://x)"), BlockKind::RawText);
        assert_eq!(classify("[alt]()"), BlockKind::RawText);
    }

    #[test]
    fn test_fallback_is_total() {
        assert_eq!(classify("just some prose"), BlockKind::RawText);
        assert_eq!(classify("####"), BlockKind::RawText);
        assert_eq!(classify("][)("), BlockKind::RawText);
    }

    #[test]
    fn test_classification_trims_for_matching() {
        assert_eq!(classify("  # Title  "), BlockKind::Heading(1));
        assert_eq!(classify("  > quote"), BlockKind::Quote);
    }
}
