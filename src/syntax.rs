//! Block and inline kinds plus the node types for the assembled
//! document tree.

pub mod ast;
pub mod kind;

pub use ast::{Block, Inline};
pub use kind::{BlockKind, InlineKind};
