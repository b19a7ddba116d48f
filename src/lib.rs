pub mod block_parser;
pub mod classifier;
pub mod config;
pub mod inline_parser;
pub mod renderer;
pub mod syntax;

pub use config::{BlockSeparator, Config, ConfigBuilder, LineEnding};
pub use syntax::{Block, BlockKind, Inline, InlineKind};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &str {
    // Check for first occurrence of \r\n or \n
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

/// Converts a Markdown document string into its rendered HTML body.
///
/// This function normalizes line endings, assembles the document's block
/// containers, extracts inline elements from each, and renders the
/// result with per-kind HTML templates.
///
/// # Examples
///
/// ```rust
/// use cindermark::to_html;
///
/// let input = "# Title\n\nSome **bold** text.";
/// let html = to_html(input, None);
/// assert!(html.contains("<h1>"));
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown document content to render
/// * `config` - Optional configuration (defaults to default config)
pub fn to_html(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let detected = detect_line_ending(input);
    let normalized_input = input.replace("\r\n", "\n");

    // Step 1 and 2: assemble blocks, then attach inline nodes
    let blocks = parse(&normalized_input);

    // Step 3: render each sealed container in sequence
    let out = renderer::render_document(&blocks, &config);

    let crlf = match config.line_ending {
        LineEnding::Crlf => true,
        LineEnding::Lf => false,
        LineEnding::Auto => detected == "\r\n",
    };

    if crlf { out.replace('\n', "\r\n") } else { out }
}

pub fn to_html_with_defaults(input: &str) -> String {
    to_html(input, None)
}

/// Parses a Markdown document string into its sealed block containers,
/// inline nodes attached.
///
/// This function normalizes line endings and runs both the block
/// assembler and the inline extractor, producing the tree the renderer
/// consumes.
///
/// # Examples
///
/// ```rust
/// use cindermark::parse;
///
/// let input = "# Heading\n\nParagraph text.";
/// let blocks = parse(input);
/// println!("{:#?}", blocks);
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown document content to parse
pub fn parse(input: &str) -> Vec<Block> {
    let normalized_input = input.replace("\r\n", "\n");
    let mut blocks = block_parser::BlockAssembler::new(&normalized_input).assemble();
    for block in &mut blocks {
        inline_parser::attach_inlines(block);
    }
    blocks
}
