//! Statement sequences.
//!
//! Statements are separated by one hard line, plus a second one where the
//! source had at least one blank line between them. Empty statements print
//! nothing and take no separator.

use tern_doc::{hardline, Doc};
use tern_ir::Node;

use crate::{Driver, FormatError};

/// A statement together with what the source said about the gap after it.
///
/// The blank-line flag is computed against the statement's source-order
/// successor, so it stays valid when statements are later reordered.
#[derive(Clone, Copy, Debug)]
pub struct StatementView<'a> {
    pub node: &'a Node,
    pub blank_line_after: bool,
}

/// Whether at least one empty source line separates `node` from `next`.
pub fn blank_line_between(node: &Node, next: &Node) -> Result<bool, FormatError> {
    let end = node
        .effective_end_line()
        .ok_or_else(|| FormatError::missing_location(node.kind.name(), "blank-line detection"))?;
    let next_start = next
        .effective_start_line()
        .ok_or_else(|| FormatError::missing_location(next.kind.name(), "blank-line detection"))?;
    Ok(next_start.saturating_sub(end) > 1)
}

/// Pair each statement with its blank-line flag.
///
/// Empty statements are skipped when looking for the successor, and the last
/// real statement never needs a location.
pub fn statement_views(statements: &[Node]) -> Result<Vec<StatementView<'_>>, FormatError> {
    let real: Vec<&Node> = statements
        .iter()
        .filter(|node| !node.is_empty_statement())
        .collect();

    let mut views = Vec::with_capacity(real.len());
    for (i, node) in real.iter().enumerate() {
        let blank_line_after = match real.get(i + 1) {
            Some(next) => blank_line_between(node, next)?,
            None => false,
        };
        views.push(StatementView {
            node,
            blank_line_after,
        });
    }
    Ok(views)
}

/// Print statements one per line, keeping single blank lines between them.
///
/// Views come from [`statement_views`] and contain no empty statements.
pub fn print_statement_sequence<D: Driver>(
    driver: &mut D,
    views: &[StatementView<'_>],
) -> Result<Doc, FormatError> {
    let mut parts = Vec::with_capacity(views.len() * 3);
    for (i, view) in views.iter().enumerate() {
        parts.push(driver.print(view.node)?);
        if i + 1 < views.len() {
            parts.push(hardline());
            if view.blank_line_after {
                parts.push(hardline());
            }
        }
    }
    Ok(Doc::Concat(parts))
}
