//! Comment types attached to syntax tree nodes.
//!
//! Comment attachment happens upstream: by the time a tree reaches the
//! formatter every comment already sits in the `comments` list of the node
//! that owns it, tagged with how it relates to that node.

use crate::SourceLoc;

/// A source comment with its location and attachment.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// Verbatim comment text including its delimiters (`// x`, `/* x */`).
    pub text: String,
    pub style: CommentStyle,
    pub placement: CommentPlacement,
    pub loc: SourceLoc,
}

impl Comment {
    /// Create a new comment.
    pub fn new(
        text: impl Into<String>,
        style: CommentStyle,
        placement: CommentPlacement,
        loc: SourceLoc,
    ) -> Self {
        Comment {
            text: text.into(),
            style,
            placement,
            loc,
        }
    }

    /// A `//` comment placed before its node.
    pub fn leading_line(text: impl Into<String>, loc: SourceLoc) -> Self {
        Comment::new(text, CommentStyle::Line, CommentPlacement::Leading, loc)
    }

    /// A `//` comment placed after its node.
    pub fn trailing_line(text: impl Into<String>, loc: SourceLoc) -> Self {
        Comment::new(text, CommentStyle::Line, CommentPlacement::Trailing, loc)
    }

    /// A `/* */` comment placed after its node.
    pub fn trailing_block(text: impl Into<String>, loc: SourceLoc) -> Self {
        Comment::new(text, CommentStyle::Block, CommentPlacement::Trailing, loc)
    }

    /// A comment owned by a container rather than by any of its children.
    pub fn dangling(text: impl Into<String>, style: CommentStyle, loc: SourceLoc) -> Self {
        Comment::new(text, style, CommentPlacement::Dangling, loc)
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        self.style == CommentStyle::Line
    }

    #[inline]
    pub fn is_leading(&self) -> bool {
        self.placement == CommentPlacement::Leading
    }

    #[inline]
    pub fn is_trailing(&self) -> bool {
        self.placement == CommentPlacement::Trailing
    }

    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.placement == CommentPlacement::Dangling
    }
}

/// Lexical form of a comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentStyle {
    /// Runs to the end of the line: `// text`
    Line,
    /// Delimited: `/* text */`
    Block,
}

/// How a comment relates to the node that owns it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentPlacement {
    Leading,
    Trailing,
    /// Owned by a container with no child to attach to (e.g. `[ /* x */ ]`).
    Dangling,
}
