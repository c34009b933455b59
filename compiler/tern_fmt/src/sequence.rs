//! Array and tuple literals.
//!
//! # Layout Selection
//!
//! - **Default**: one group; flat if it fits, otherwise one element per line.
//! - **Concise**: all-numeric literals are packed into a fill, as many per
//!   line as fit. The trailing comma follows the sequence's own group, since
//!   the fill may wrap while the group stays the same.
//! - **Matrix**: a concise literal whose source rows all have the same length
//!   keeps those rows.
//!
//! Literals whose elements are all arrays (or all objects) with more than one
//! item always break, so tables of rows read one row per line.

use tern_doc::{docs, fill, group, hardline, if_break, if_break_in, indent, line, nil, softline};
use tern_doc::{text, Doc, Group};
use tern_ir::{Node, NodeKind, Sequence};

use crate::statement::blank_line_between;
use crate::{Driver, FormatError};

/// Which bracket pair a sequence uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    Array,
    Tuple,
}

impl SequenceKind {
    fn open_bracket(self) -> &'static str {
        match self {
            SequenceKind::Array => "[",
            SequenceKind::Tuple => "#[",
        }
    }
}

/// Print an array or tuple literal.
///
/// With two or more elements, every present element needs a source location:
/// blank lines between elements are read from line numbers, so a tree built
/// with bare [`Node::new`] fails with [`FormatError::MissingLocation`]. Give
/// synthesized elements a location with [`Node::on_lines`].
#[tracing::instrument(level = "trace", skip_all, fields(len = seq.elements.len()))]
pub fn print_sequence<D: Driver>(
    driver: &mut D,
    node: &Node,
    seq: &Sequence,
    kind: SequenceKind,
) -> Result<Doc, FormatError> {
    let open = kind.open_bracket();

    if seq.elements.is_empty() {
        if !node.has_dangling_comments() {
            return Ok(docs![open, "]"]);
        }
        return Ok(group(docs![
            open,
            driver.print_dangling_comments(node, false),
            softline(),
            "]"
        ]));
    }

    let config = *driver.config();
    let last = seq.elements.last().and_then(Option::as_ref);
    let can_have_trailing_comma = !last.is_some_and(Node::is_rest);
    // A final hole only exists if the comma after it survives.
    let needs_forced_trailing_comma = matches!(seq.elements.last(), Some(None));

    let group_id = driver.next_group_id();
    let should_break = has_uniform_nested_shape(seq);
    let concise = config.concise_arrays && is_concisely_printed(seq);

    let trailing_comma = if !can_have_trailing_comma {
        nil()
    } else if needs_forced_trailing_comma {
        text(",")
    } else if !config.trailing_comma.in_literals() {
        nil()
    } else if concise {
        if_break_in(group_id, ",", "")
    } else {
        if_break(",", "")
    };

    tracing::debug!(concise, should_break, "sequence layout");

    let items = if concise {
        print_items_concisely(driver, seq, trailing_comma)?
    } else {
        docs![print_items(driver, seq)?, trailing_comma]
    };

    let dangling = if node.has_dangling_comments() {
        docs![line(), driver.print_dangling_comments(node, true)]
    } else {
        nil()
    };

    let printed = Group::new(docs![
        open,
        indent(docs![softline(), items, dangling]),
        softline(),
        "]"
    ])
    .with_id(group_id)
    .with_break(should_break);

    Ok(printed.into())
}

/// Elements separated by `,` and a line, each in its own group.
fn print_items<D: Driver>(driver: &mut D, seq: &Sequence) -> Result<Doc, FormatError> {
    let mut parts = Vec::with_capacity(seq.elements.len() * 4);

    for (i, slot) in seq.elements.iter().enumerate() {
        if i > 0 {
            parts.push(text(","));
            parts.push(line());
            if blank_line_after_slot(seq, i - 1)? {
                parts.push(softline());
            }
        }
        let printed = match slot {
            Some(element) => driver.print(element)?,
            None => nil(),
        };
        parts.push(group(printed));
    }

    Ok(Doc::Concat(parts))
}

fn blank_line_after_slot(seq: &Sequence, index: usize) -> Result<bool, FormatError> {
    match (&seq.elements[index], seq.elements.get(index + 1)) {
        (Some(element), Some(Some(next))) => blank_line_between(element, next),
        _ => Ok(false),
    }
}

/// Numeric elements packed into a fill.
fn print_items_concisely<D: Driver>(
    driver: &mut D,
    seq: &Sequence,
    trailing_comma: Doc,
) -> Result<Doc, FormatError> {
    let elements: Vec<&Node> = seq.elements.iter().filter_map(Option::as_ref).collect();
    let Some((last, init)) = elements.split_last() else {
        return Ok(trailing_comma);
    };

    let matrix = driver.config().matrix_arrays && is_matrix(&elements)?;
    tracing::debug!(matrix, "concise sequence");

    let mut parts = Vec::with_capacity(elements.len() * 2);
    for (i, element) in init.iter().enumerate() {
        parts.push(docs![driver.print(element)?, ","]);
        let next = elements[i + 1];
        let separator = if matrix {
            if element.start_line() == next.start_line() {
                line()
            } else {
                hardline()
            }
        } else if blank_line_between(element, next)? {
            docs![hardline(), hardline()]
        } else if has_leading_line_comment(next) {
            hardline()
        } else {
            line()
        };
        parts.push(separator);
    }
    parts.push(docs![driver.print(last)?, trailing_comma]);

    Ok(fill(parts))
}

/// Whether source rows (runs of elements starting on the same line) all
/// have the same length.
fn is_matrix(elements: &[&Node]) -> Result<bool, FormatError> {
    let mut rows: Vec<usize> = Vec::new();
    let mut current_line = None;

    for element in elements {
        let line = element.start_line().ok_or_else(|| {
            FormatError::missing_location("array element", "matrix layout detection")
        })?;
        match rows.last_mut() {
            Some(count) if current_line == Some(line) => *count += 1,
            _ => {
                rows.push(1);
                current_line = Some(line);
            }
        }
    }

    Ok(rows.windows(2).all(|pair| pair[0] == pair[1]))
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Shape {
    Array,
    Object,
}

fn shape_of(node: &Node) -> Option<Shape> {
    match node.kind {
        NodeKind::Array(_) => Some(Shape::Array),
        NodeKind::Object { .. } => Some(Shape::Object),
        _ => None,
    }
}

/// Every element is an array (or every element an object) with more than
/// one item.
fn has_uniform_nested_shape(seq: &Sequence) -> bool {
    seq.elements.len() > 1
        && seq.elements.iter().enumerate().all(|(i, slot)| {
            let Some(element) = slot else {
                return false;
            };
            let Some(shape) = shape_of(element) else {
                return false;
            };
            if let Some(Some(next)) = seq.elements.get(i + 1) {
                if shape_of(next) != Some(shape) {
                    return false;
                }
            }
            element.literal_item_count().is_some_and(|count| count > 1)
        })
}

/// More than one element, all numeric or signed numeric literals, none
/// followed by a line comment on the same line.
fn is_concisely_printed(seq: &Sequence) -> bool {
    seq.elements.len() > 1
        && seq.elements.iter().all(|slot| {
            slot.as_ref().is_some_and(|element| {
                let numeric = match &element.kind {
                    NodeKind::NumericLiteral(_) => true,
                    NodeKind::Unary { argument, .. } => {
                        element.is_signed_numeric_literal() && !argument.has_comments()
                    }
                    _ => false,
                };
                numeric && !has_same_line_trailing_line_comment(element)
            })
        })
}

fn has_same_line_trailing_line_comment(element: &Node) -> bool {
    element.comments.iter().any(|comment| {
        comment.is_trailing()
            && comment.is_line()
            && !element
                .end_line()
                .is_some_and(|end| comment.loc.start_line > end)
    })
}

fn has_leading_line_comment(node: &Node) -> bool {
    node.comments
        .iter()
        .any(|comment| comment.is_leading() && comment.is_line())
}
