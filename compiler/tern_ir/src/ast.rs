//! AST nodes consumed by the formatter.
//!
//! The node set is closed: every construct the formatter can print has a
//! variant in `NodeKind`, and printers match on it exhaustively.

use crate::{Comment, SourceLoc};

/// A syntax tree node with its source location and attached comments.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub kind: NodeKind,
    /// `None` for synthesized nodes that have no source position.
    pub loc: Option<SourceLoc>,
    /// Comments owned by this node, in source order.
    pub comments: Vec<Comment>,
}

/// Accessor flavour of a class method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodKind {
    Method,
    Get,
    Set,
    Constructor,
}

impl MethodKind {
    /// `get` and `set` methods.
    #[inline]
    pub fn is_accessor(self) -> bool {
        matches!(self, MethodKind::Get | MethodKind::Set)
    }
}

/// Ordered element slots of an array or tuple literal.
///
/// `None` is an elided slot (`[1, , 3]`); it changes the literal's length
/// and therefore whether a trailing comma is significant.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    pub elements: Vec<Option<Node>>,
}

/// What kind of braced body a `Block` is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// `{ ... }` as a statement or as the body of a function/loop/etc.
    Statement,
    /// The member list of a class.
    ClassBody,
    /// `static { ... }` inside a class body.
    StaticBlock,
    /// Top level of a file; printed without braces.
    Program,
}

/// An ordered statement or member list, optionally preceded by directives.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub kind: BlockKind,
    /// Prologue entries such as `"use strict"`.
    pub directives: Vec<Node>,
    pub body: Vec<Node>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    // Expressions
    /// Numeric literal, raw source text (`1`, `0x1F`, `1.5e3`).
    NumericLiteral(String),
    /// String literal, raw source text including quotes.
    StringLiteral(String),
    Identifier(String),
    Unary {
        operator: String,
        argument: Box<Node>,
    },
    Array(Sequence),
    /// Record/tuple literal `#[a, b]`.
    Tuple(Sequence),
    Object {
        properties: Vec<Node>,
    },
    Property {
        key: Box<Node>,
        value: Box<Node>,
    },
    Rest(Box<Node>),
    Spread(Box<Node>),

    // Statements
    ExpressionStatement(Box<Node>),
    Return(Option<Box<Node>>),
    EmptyStatement,
    /// Prologue directive, raw source text including quotes.
    Directive(String),
    Block(Block),
    If {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    While {
        test: Box<Node>,
        body: Box<Node>,
    },
    DoWhile {
        body: Box<Node>,
        test: Box<Node>,
    },
    For {
        init: Option<Box<Node>>,
        test: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    Try {
        block: Box<Node>,
        handler: Option<Box<Node>>,
        finalizer: Option<Box<Node>>,
    },
    CatchClause {
        param: Option<Box<Node>>,
        body: Box<Node>,
    },

    // Declarations
    Function {
        name: String,
        params: Vec<Node>,
        body: Box<Node>,
    },
    Class {
        name: String,
        superclass: Option<Box<Node>>,
        body: Box<Node>,
    },
    ClassProperty {
        key: String,
        value: Option<Box<Node>>,
        is_static: bool,
        is_private: bool,
    },
    ClassMethod {
        kind: MethodKind,
        key: String,
        params: Vec<Node>,
        body: Box<Node>,
        is_static: bool,
        is_private: bool,
    },
    /// Ambient module declaration: `declare module "name" { ... }`.
    DeclareModule {
        name: String,
        body: Box<Node>,
    },
}

impl Node {
    /// Create a node without location or comments.
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            loc: None,
            comments: Vec::new(),
        }
    }

    /// Attach a source location.
    #[must_use]
    pub fn at(mut self, loc: SourceLoc) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Attach a whole-line source location.
    #[must_use]
    pub fn on_lines(self, start_line: u32, end_line: u32) -> Self {
        self.at(SourceLoc::lines(start_line, end_line))
    }

    /// Attach a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn number(raw: impl Into<String>) -> Self {
        Node::new(NodeKind::NumericLiteral(raw.into()))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Node::new(NodeKind::Identifier(name.into()))
    }

    pub fn array(elements: Vec<Option<Node>>) -> Self {
        Node::new(NodeKind::Array(Sequence { elements }))
    }

    pub fn expression_statement(expr: Node) -> Self {
        Node::new(NodeKind::ExpressionStatement(Box::new(expr)))
    }

    pub fn block(kind: BlockKind, directives: Vec<Node>, body: Vec<Node>) -> Self {
        Node::new(NodeKind::Block(Block {
            kind,
            directives,
            body,
        }))
    }

    #[inline]
    pub fn start_line(&self) -> Option<u32> {
        self.loc.map(|loc| loc.start_line)
    }

    #[inline]
    pub fn end_line(&self) -> Option<u32> {
        self.loc.map(|loc| loc.end_line)
    }

    /// First line this node occupies once its leading comment is counted.
    ///
    /// When the first attached comment starts before the node itself, the
    /// comment's line wins.
    pub fn effective_start_line(&self) -> Option<u32> {
        let start = self.start_line()?;
        match self.comments.first() {
            Some(comment) if comment.loc.start_line < start => Some(comment.loc.start_line),
            _ => Some(start),
        }
    }

    /// Last line this node occupies once its trailing comment is counted.
    pub fn effective_end_line(&self) -> Option<u32> {
        let end = self.end_line()?;
        match self.comments.last() {
            Some(comment) if comment.loc.end_line > end => Some(comment.loc.end_line),
            _ => Some(end),
        }
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }

    /// Comments owned by this node that belong to no child.
    pub fn dangling_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(|c| c.is_dangling())
    }

    pub fn has_dangling_comments(&self) -> bool {
        self.comments.iter().any(Comment::is_dangling)
    }

    pub fn is_numeric_literal(&self) -> bool {
        matches!(self.kind, NodeKind::NumericLiteral(_))
    }

    /// `-1`, `+2.5`: a sign operator applied directly to a numeric literal.
    pub fn is_signed_numeric_literal(&self) -> bool {
        match &self.kind {
            NodeKind::Unary { operator, argument } => {
                (operator == "-" || operator == "+") && argument.is_numeric_literal()
            }
            _ => false,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self.kind, NodeKind::Rest(_))
    }

    pub fn is_empty_statement(&self) -> bool {
        matches!(self.kind, NodeKind::EmptyStatement)
    }

    /// Class members declared with a `#name`.
    pub fn is_private_member(&self) -> bool {
        match self.kind {
            NodeKind::ClassProperty { is_private, .. } | NodeKind::ClassMethod { is_private, .. } => {
                is_private
            }
            _ => false,
        }
    }

    /// Number of items in an array or object literal; `None` for anything else.
    pub fn literal_item_count(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Array(seq) => Some(seq.elements.len()),
            NodeKind::Object { properties } => Some(properties.len()),
            _ => None,
        }
    }
}

impl NodeKind {
    /// Human-readable construct name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::NumericLiteral(_) => "numeric literal",
            NodeKind::StringLiteral(_) => "string literal",
            NodeKind::Identifier(_) => "identifier",
            NodeKind::Unary { .. } => "unary expression",
            NodeKind::Array(_) => "array",
            NodeKind::Tuple(_) => "tuple",
            NodeKind::Object { .. } => "object",
            NodeKind::Property { .. } => "property",
            NodeKind::Rest(_) => "rest element",
            NodeKind::Spread(_) => "spread element",
            NodeKind::ExpressionStatement(_) => "expression statement",
            NodeKind::Return(_) => "return statement",
            NodeKind::EmptyStatement => "empty statement",
            NodeKind::Directive(_) => "directive",
            NodeKind::Block(block) => match block.kind {
                BlockKind::Statement => "block",
                BlockKind::ClassBody => "class body",
                BlockKind::StaticBlock => "static block",
                BlockKind::Program => "program",
            },
            NodeKind::If { .. } => "if statement",
            NodeKind::While { .. } => "while loop",
            NodeKind::DoWhile { .. } => "do-while loop",
            NodeKind::For { .. } => "for loop",
            NodeKind::Try { .. } => "try statement",
            NodeKind::CatchClause { .. } => "catch clause",
            NodeKind::Function { .. } => "function",
            NodeKind::Class { .. } => "class",
            NodeKind::ClassProperty { .. } => "class property",
            NodeKind::ClassMethod { .. } => "class method",
            NodeKind::DeclareModule { .. } => "module declaration",
        }
    }
}

#[cfg(test)]
mod tests;
