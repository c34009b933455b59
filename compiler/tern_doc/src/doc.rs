//! Document IR nodes and builders.
//!
//! The IR captures formatting intent (groups, indentation, line breaks)
//! without committing to a layout until rendering.

use std::borrow::Cow;
use std::fmt;

/// A document IR node.
///
/// The renderer decides at each `Group` boundary whether to lay the group out
/// flat (on one line) or broken (line breaks plus indentation), and at each
/// separator of a `Fill` whether the next item still fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    /// Produces no output.
    Nil,
    /// Literal text without line breaks.
    Text(Cow<'static, str>),
    /// A space when flat; newline plus indentation when broken.
    Line,
    /// Nothing when flat; newline plus indentation when broken.
    SoftLine,
    /// Always a newline. Forces every enclosing group to break.
    HardLine,
    /// Forces every enclosing group to break without printing anything.
    BreakParent,
    Group(Group),
    /// Increase indentation for line breaks inside the child.
    Indent(Box<Doc>),
    /// Content chosen by the mode of the enclosing group, or of the group
    /// named by `group_id`.
    IfBreak {
        broken: Box<Doc>,
        flat: Box<Doc>,
        group_id: Option<GroupId>,
    },
    /// Alternating content and separator items. Each separator breaks only
    /// when the content after it would not fit on the current line.
    Fill(Vec<Doc>),
    Concat(Vec<Doc>),
    /// Content deferred until just before the next newline (trailing line
    /// comments ride here so that punctuation printed after them stays put).
    LineSuffix(Box<Doc>),
}

/// A unit whose contents share one flat-or-broken decision.
///
/// Only constructible through [`Group::new`] / [`group`], which fold forced
/// breaks of the contents into `should_break`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    contents: Box<Doc>,
    id: Option<GroupId>,
    should_break: bool,
}

impl Group {
    /// Create a group, propagating forced breaks from its contents.
    pub fn new(contents: Doc) -> Self {
        let should_break = contents.has_forced_break();
        Group {
            contents: Box::new(contents),
            id: None,
            should_break,
        }
    }

    /// Name this group so `IfBreak` nodes elsewhere can follow its mode.
    #[must_use]
    pub fn with_id(mut self, id: GroupId) -> Self {
        self.id = Some(id);
        self
    }

    /// Request broken mode regardless of width.
    ///
    /// Passing `false` never clears a break propagated from the contents.
    #[must_use]
    pub fn with_break(mut self, should_break: bool) -> Self {
        self.should_break |= should_break;
        self
    }

    #[inline]
    pub fn contents(&self) -> &Doc {
        &self.contents
    }

    #[inline]
    pub fn id(&self) -> Option<GroupId> {
        self.id
    }

    #[inline]
    pub fn should_break(&self) -> bool {
        self.should_break
    }
}

impl From<Group> for Doc {
    fn from(group: Group) -> Self {
        Doc::Group(group)
    }
}

impl Doc {
    /// Whether this doc forces its enclosing group to break.
    ///
    /// Nested groups contribute their own (already propagated) flag, so the
    /// walk stops at group boundaries.
    pub fn has_forced_break(&self) -> bool {
        match self {
            Doc::HardLine | Doc::BreakParent => true,
            Doc::Group(group) => group.should_break,
            Doc::Indent(child) | Doc::LineSuffix(child) => child.has_forced_break(),
            Doc::IfBreak { broken, flat, .. } => broken.has_forced_break() || flat.has_forced_break(),
            Doc::Fill(parts) | Doc::Concat(parts) => parts.iter().any(Doc::has_forced_break),
            Doc::Nil | Doc::Text(_) | Doc::Line | Doc::SoftLine => false,
        }
    }
}

impl From<&'static str> for Doc {
    fn from(s: &'static str) -> Self {
        Doc::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Doc {
    fn from(s: String) -> Self {
        Doc::Text(Cow::Owned(s))
    }
}

impl From<Vec<Doc>> for Doc {
    fn from(parts: Vec<Doc>) -> Self {
        Doc::Concat(parts)
    }
}

/// Identity of a group within one print call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh group ids.
///
/// One generator per print call; ids are meaningless outside the tree they
/// were created for.
#[derive(Debug, Default)]
pub struct GroupIdGen {
    next: u32,
}

impl GroupIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> GroupId {
        let id = GroupId(self.next);
        self.next += 1;
        id
    }
}

/// Build a `Concat` from heterogeneous parts (`&'static str`, `String`, `Doc`).
#[macro_export]
macro_rules! docs {
    () => {
        $crate::Doc::Concat(Vec::new())
    };
    ($($part:expr),+ $(,)?) => {
        $crate::Doc::Concat(vec![$($crate::Doc::from($part)),+])
    };
}

// ── Helper constructors ─────────────────────────────────────────────────

#[inline]
pub fn nil() -> Doc {
    Doc::Nil
}

/// Create a `Text` node from a string-like value.
pub fn text(s: impl Into<Cow<'static, str>>) -> Doc {
    Doc::Text(s.into())
}

#[inline]
pub fn line() -> Doc {
    Doc::Line
}

#[inline]
pub fn softline() -> Doc {
    Doc::SoftLine
}

#[inline]
pub fn hardline() -> Doc {
    Doc::HardLine
}

#[inline]
pub fn break_parent() -> Doc {
    Doc::BreakParent
}

/// Create a `Group` that renders flat if it fits, broken otherwise.
pub fn group(contents: impl Into<Doc>) -> Doc {
    Doc::Group(Group::new(contents.into()))
}

pub fn indent(contents: impl Into<Doc>) -> Doc {
    Doc::Indent(Box::new(contents.into()))
}

/// Content chosen by the mode of the enclosing group.
pub fn if_break(broken: impl Into<Doc>, flat: impl Into<Doc>) -> Doc {
    Doc::IfBreak {
        broken: Box::new(broken.into()),
        flat: Box::new(flat.into()),
        group_id: None,
    }
}

/// Content chosen by the mode of the group named `group_id`.
pub fn if_break_in(group_id: GroupId, broken: impl Into<Doc>, flat: impl Into<Doc>) -> Doc {
    Doc::IfBreak {
        broken: Box::new(broken.into()),
        flat: Box::new(flat.into()),
        group_id: Some(group_id),
    }
}

pub fn fill(parts: Vec<Doc>) -> Doc {
    Doc::Fill(parts)
}

pub fn line_suffix(contents: impl Into<Doc>) -> Doc {
    Doc::LineSuffix(Box::new(contents.into()))
}

/// Interleave `separator` between `docs`.
pub fn join(separator: &Doc, docs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut parts = Vec::new();
    for (i, doc) in docs.into_iter().enumerate() {
        if i > 0 {
            parts.push(separator.clone());
        }
        parts.push(doc);
    }
    Doc::Concat(parts)
}
