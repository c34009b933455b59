//! Tern IR - Syntax Tree Types
//!
//! This crate contains the input model for the Tern formatter:
//! - Spans and line ranges for source locations
//! - Comments with their attachment placement
//! - AST nodes for the constructs the formatter understands
//!
//! Trees are produced by an external parser and handed to the formatter
//! read-only. Nothing in this crate mutates a tree after construction; the
//! formatter derives new views (e.g. reordered class members) instead.

mod ast;
mod comment;
mod span;

pub use ast::{Block, BlockKind, MethodKind, Node, NodeKind, Sequence};
pub use comment::{Comment, CommentPlacement, CommentStyle};
pub use span::{SourceLoc, Span};
