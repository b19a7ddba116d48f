use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cindermark")]
#[command(author, version)]
#[command(about = "A lightweight Markdown to HTML converter")]
#[command(
    long_about = "Cindermark is a CLI converter for a small Markdown dialect: headings, \
    paragraphs, block quotes, lists, indented code blocks, links, images, and inline \
    emphasis. It renders the document body as HTML; wrapping it in a page template is \
    left to the caller."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    cindermark render document.md

    # Render from stdin
    cat document.md | cindermark render

    # Write the HTML next to the source
    cindermark render document.md -o document.html

    # Use custom config
    cindermark render --config custom.toml document.md

    # Inspect the block tree
    cindermark parse document.md

CONFIGURATION:

Cindermark looks for configuration files in this order:
  1. Explicit --config path
  2. cindermark.toml or .cindermark.toml in current/parent directories
  3. ~/.config/cindermark/config.toml (XDG)
  4. Built-in defaults

Example .cindermark.toml:

    block_separator = \"blank-line\"
    trailing_newline = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a Markdown document to HTML
    #[command(
        long_about = "Render a Markdown document to HTML. By default, outputs the rendered \
        body to stdout; use --output to write it to a file instead."
    )]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        #[arg(help = "Write the HTML to this file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Parse a Markdown document and print its block tree
    #[command(
        long_about = "Parse a Markdown document and print the assembled block containers \
        with their inline nodes. Useful for debugging classification and assembly."
    )]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
