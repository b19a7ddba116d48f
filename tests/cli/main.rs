//! CLI integration tests for cindermark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, parse)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations
//! - Error handling

mod common;
mod parse;
mod render;
