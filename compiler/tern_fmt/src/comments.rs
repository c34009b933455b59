//! Comment printing.
//!
//! Comments arrive already attached to the node they belong to, tagged as
//! leading, trailing, or dangling. This module only decides how each one is
//! laid out relative to the printed node:
//!
//! - Leading comments go before the node, on their own line unless a block
//!   comment shares the node's first line.
//! - Trailing comments on the node's last line are deferred to the end of the
//!   output line; trailing comments below the node keep their own line.
//! - Dangling comments are printed by the construct that owns them.

use tern_doc::{break_parent, docs, hardline, indent, join, line_suffix, nil, text, Doc};
use tern_ir::{Comment, Node};

/// Surround `printed` with the leading and trailing comments of `node`.
pub fn print_comments(node: &Node, printed: Doc) -> Doc {
    if !node.has_comments() {
        return printed;
    }

    let leading: Vec<&Comment> = node.comments.iter().filter(|c| c.is_leading()).collect();
    let trailing: Vec<&Comment> = node.comments.iter().filter(|c| c.is_trailing()).collect();
    if leading.is_empty() && trailing.is_empty() {
        return printed;
    }

    let mut parts = Vec::with_capacity(leading.len() * 3 + trailing.len() + 1);

    for (i, comment) in leading.iter().enumerate() {
        // The line where whatever follows this comment starts.
        let next_line = leading
            .get(i + 1)
            .map(|next| next.loc.start_line)
            .or_else(|| node.start_line());
        parts.push(print_leading(comment, next_line));
    }

    parts.push(printed);

    let mut previous_end = node.end_line();
    for comment in trailing {
        parts.push(print_trailing(comment, previous_end));
        previous_end = Some(comment.loc.end_line);
    }

    Doc::Concat(parts)
}

fn print_leading(comment: &Comment, next_line: Option<u32>) -> Doc {
    let contents = text(comment.text.clone());
    let on_own_line = comment.is_line() || next_line.is_some_and(|line| line > comment.loc.end_line);
    if !on_own_line {
        return docs![contents, " "];
    }

    let blank_after = next_line.is_some_and(|line| comment.loc.lines_between(line) > 0);
    if blank_after {
        docs![contents, hardline(), hardline()]
    } else {
        docs![contents, hardline()]
    }
}

fn print_trailing(comment: &Comment, previous_end: Option<u32>) -> Doc {
    let contents = text(comment.text.clone());

    match previous_end {
        Some(end) if comment.loc.start_line > end => {
            let blank_before = end + 1 < comment.loc.start_line;
            let separator = if blank_before {
                docs![hardline(), hardline()]
            } else {
                hardline()
            };
            let deferred = line_suffix(docs![separator, contents]);
            if comment.is_line() {
                docs![deferred, break_parent()]
            } else {
                deferred
            }
        }
        _ if comment.is_line() => docs![line_suffix(docs![" ", contents]), break_parent()],
        _ => docs![" ", contents],
    }
}

/// Print the dangling comments of `node`, one per line.
///
/// With `same_indent` the comments continue at the current indentation;
/// otherwise they start on a new, indented line.
pub fn print_dangling(node: &Node, same_indent: bool) -> Doc {
    let comments: Vec<&Comment> = node.dangling_comments().collect();
    if comments.is_empty() {
        return nil();
    }

    let has_line_comment = comments.iter().any(|c| c.is_line());
    let printed = join(
        &hardline(),
        comments.iter().map(|comment| text(comment.text.clone())),
    );
    let printed = if has_line_comment {
        docs![printed, break_parent()]
    } else {
        printed
    };

    if same_indent {
        printed
    } else {
        indent(docs![hardline(), printed])
    }
}
