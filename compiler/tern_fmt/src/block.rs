//! Braced statement and class bodies.
//!
//! A block prints as `{`, its directives and statements one per line at one
//! more indentation level, then `}`. Options adjust the edges:
//!
//! - `brace-style = allman` moves `{` to its own line.
//! - `accessor-one-line` prints a short `get`/`set` body as `{ stmt }`.
//! - `preserve-blank-lines` keeps blank lines after `{` and before `}`.
//! - `class-member-order` moves `#private` members to the front or back.
//!
//! The top-level program uses the same body printer without braces.

use tern_doc::{docs, hardline, indent, nil, text, Doc};
use tern_ir::{Block, BlockKind, Node};

use crate::config::{BraceStyle, ClassMemberOrder, FormatConfig};
use crate::statement::{blank_line_between, print_statement_sequence, statement_views};
use crate::statement::StatementView;
use crate::{Driver, FormatError};

/// The construct a block is the body of.
///
/// Owners whose surrounding syntax already ends a line print an empty body
/// as `{}`; every other empty block gets a line break between its braces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockOwner {
    Program,
    /// Free-standing block, `if`/`else` branch, `try`/`finally` body.
    Statement,
    Function,
    /// `get`/`set` method; carries the byte length of the whole accessor
    /// source for one-line collapsing, `None` when the span is unknown or
    /// empty (e.g. `Span::DUMMY`).
    Accessor { span_len: Option<u32> },
    Loop,
    Catch { has_finalizer: bool },
    /// `declare module` body.
    Declaration,
    Class,
}

impl BlockOwner {
    fn keeps_empty_body_closed(self) -> bool {
        match self {
            BlockOwner::Function
            | BlockOwner::Accessor { .. }
            | BlockOwner::Loop
            | BlockOwner::Declaration
            | BlockOwner::Class => true,
            BlockOwner::Catch { has_finalizer } => !has_finalizer,
            BlockOwner::Program | BlockOwner::Statement => false,
        }
    }
}

/// Print a block with its braces.
#[tracing::instrument(level = "trace", skip_all, fields(kind = ?block.kind, owner = ?owner))]
pub fn print_block<D: Driver>(
    driver: &mut D,
    node: &Node,
    block: &Block,
    owner: BlockOwner,
) -> Result<Doc, FormatError> {
    if block.kind == BlockKind::Program {
        return print_program(driver, node, block);
    }

    let config = *driver.config();
    let reorder =
        block.kind == BlockKind::ClassBody && config.class_member_order != ClassMemberOrder::None;
    let collapse = accessor_collapses(&config, block, owner)?;
    let preserve = config.preserve_blank_lines && !collapse && !reorder;

    let mut views = statement_views(&block.body)?;
    if reorder {
        views = reorder_members(views, config.class_member_order);
    }

    tracing::debug!(reorder, collapse, preserve, "block layout");

    let mut parts = Vec::new();

    if block.kind == BlockKind::StaticBlock {
        parts.push(text("static "));
    }
    if config.brace_style == BraceStyle::Allman && !collapse {
        parts.push(hardline());
    }
    parts.push(text("{"));

    let body = print_block_body(driver, node, block, &views)?;
    match body {
        Some(printed) => {
            if preserve {
                push_hardlines(&mut parts, leading_blank_lines(node, block)?);
            }
            if collapse {
                parts.push(indent(docs![" ", printed]));
                parts.push(text(" "));
            } else {
                parts.push(indent(docs![hardline(), printed]));
                parts.push(hardline());
            }
            if preserve {
                push_hardlines(&mut parts, trailing_blank_lines(node, block)?);
            }
        }
        None => {
            let closed = owner.keeps_empty_body_closed()
                || matches!(block.kind, BlockKind::StaticBlock | BlockKind::ClassBody);
            if !closed {
                parts.push(hardline());
            }
        }
    }

    parts.push(text("}"));
    Ok(Doc::Concat(parts))
}

/// Print the top level: the block body without braces, ending in a newline.
pub fn print_program<D: Driver>(
    driver: &mut D,
    node: &Node,
    block: &Block,
) -> Result<Doc, FormatError> {
    let views = statement_views(&block.body)?;
    Ok(match print_block_body(driver, node, block, &views)? {
        Some(body) => docs![body, hardline()],
        None => nil(),
    })
}

/// Directives, statements, and dangling comments of a block.
///
/// `None` when there is nothing to print (only empty statements, no
/// directives, no comments).
pub fn print_block_body<D: Driver>(
    driver: &mut D,
    node: &Node,
    block: &Block,
    views: &[StatementView<'_>],
) -> Result<Option<Doc>, FormatError> {
    let has_directives = !block.directives.is_empty();
    let has_body = !views.is_empty();
    let has_dangling = node.has_dangling_comments();

    if !has_directives && !has_body && !has_dangling {
        return Ok(None);
    }

    let mut parts = Vec::new();

    for (i, directive) in block.directives.iter().enumerate() {
        parts.push(driver.print(directive)?);
        let next = block.directives.get(i + 1).or_else(|| views.first().map(|v| v.node));
        if next.is_some() || has_dangling {
            parts.push(hardline());
        }
        if let Some(next) = next {
            if blank_line_between(directive, next)? {
                parts.push(hardline());
            }
        }
    }

    if has_body {
        parts.push(print_statement_sequence(driver, views)?);
    }

    if has_dangling {
        if has_body {
            parts.push(hardline());
        }
        parts.push(driver.print_dangling_comments(node, true));
    }

    Ok(Some(Doc::Concat(parts)))
}

/// Collapse `get x() { return 1; }` onto one line?
fn accessor_collapses(
    config: &FormatConfig,
    block: &Block,
    owner: BlockOwner,
) -> Result<bool, FormatError> {
    let BlockOwner::Accessor { span_len } = owner else {
        return Ok(false);
    };
    if !config.accessor_one_line || block.body.len() != 1 || !block.directives.is_empty() {
        return Ok(false);
    }
    let span_len = span_len
        .ok_or_else(|| FormatError::missing_location("accessor", "one-line accessor layout"))?;
    Ok(usize::try_from(span_len).is_ok_and(|len| len <= config.print_width))
}

/// Stable partition of class members by visibility.
fn reorder_members(
    views: Vec<StatementView<'_>>,
    order: ClassMemberOrder,
) -> Vec<StatementView<'_>> {
    let private_first = match order {
        ClassMemberOrder::None => return views,
        ClassMemberOrder::PrivateFirst => true,
        ClassMemberOrder::PrivateLast => false,
    };
    let (mut first, rest): (Vec<_>, Vec<_>) = views
        .into_iter()
        .partition(|view| view.node.is_private_member() == private_first);
    first.extend(rest);
    first
}

fn push_hardlines(parts: &mut Vec<Doc>, count: u32) {
    for _ in 0..count {
        parts.push(hardline());
    }
}

/// Empty source lines between `{` and the first entry.
fn leading_blank_lines(node: &Node, block: &Block) -> Result<u32, FormatError> {
    let Some(first) = block
        .directives
        .first()
        .or_else(|| block.body.iter().find(|n| !n.is_empty_statement()))
    else {
        return Ok(0);
    };
    let block_start = node
        .start_line()
        .ok_or_else(|| FormatError::missing_location(node.kind.name(), "blank-line preservation"))?;
    let first_start = first
        .effective_start_line()
        .ok_or_else(|| FormatError::missing_location(first.kind.name(), "blank-line preservation"))?;
    Ok(first_start.saturating_sub(block_start).saturating_sub(1))
}

/// Empty source lines between the last entry and `}`.
fn trailing_blank_lines(node: &Node, block: &Block) -> Result<u32, FormatError> {
    let Some(last) = block
        .body
        .iter()
        .rev()
        .find(|n| !n.is_empty_statement())
        .or_else(|| block.directives.last())
    else {
        return Ok(0);
    };
    let block_end = node
        .end_line()
        .ok_or_else(|| FormatError::missing_location(node.kind.name(), "blank-line preservation"))?;
    let last_end = last
        .effective_end_line()
        .ok_or_else(|| FormatError::missing_location(last.kind.name(), "blank-line preservation"))?;
    Ok(block_end.saturating_sub(last_end).saturating_sub(1))
}
