//! Source location spans.
//!
//! A `Span` is a compact byte range; a `SourceLoc` pairs it with the first
//! and last source line the node occupies. Line numbers are parse-time
//! metadata: the formatter reads them for blank-line and matrix heuristics
//! and never recomputes them from its own output.

use std::fmt;

/// Byte range in the source text.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized nodes.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Where a node sits in the source text.
///
/// Lines are 1-based and inclusive: a node on a single line has
/// `start_line == end_line`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLoc {
    pub span: Span,
    pub start_line: u32,
    pub end_line: u32,
}

impl SourceLoc {
    /// Create a location from a byte span and its line range.
    #[inline]
    pub const fn new(span: Span, start_line: u32, end_line: u32) -> Self {
        SourceLoc {
            span,
            start_line,
            end_line,
        }
    }

    /// Location covering whole lines only, with no meaningful byte offsets.
    ///
    /// Convenient for trees whose consumer only needs line information.
    #[inline]
    pub const fn lines(start_line: u32, end_line: u32) -> Self {
        SourceLoc::new(Span::DUMMY, start_line, end_line)
    }

    /// Number of source lines strictly between `self` and a later location.
    ///
    /// Zero when they are adjacent or overlap.
    #[inline]
    pub fn lines_between(&self, later_start_line: u32) -> u32 {
        later_start_line.saturating_sub(self.end_line).saturating_sub(1)
    }
}
