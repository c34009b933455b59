//! Construction-time checks over a finished document tree.

use rustc_hash::FxHashSet;

use crate::{Doc, DocError, GroupId};

/// Check that every `IfBreak` group reference resolves before it is used.
///
/// Rendering resolves group modes top-down in document order, so a
/// reference is valid when the named group encloses the `IfBreak` or appears
/// earlier in the tree.
pub fn validate(doc: &Doc) -> Result<(), DocError> {
    let mut seen = FxHashSet::default();
    visit(doc, &mut seen)
}

fn visit(doc: &Doc, seen: &mut FxHashSet<GroupId>) -> Result<(), DocError> {
    match doc {
        Doc::Nil
        | Doc::Text(_)
        | Doc::Line
        | Doc::SoftLine
        | Doc::HardLine
        | Doc::BreakParent => Ok(()),
        Doc::Group(group) => {
            if let Some(id) = group.id() {
                seen.insert(id);
            }
            visit(group.contents(), seen)
        }
        Doc::Indent(child) | Doc::LineSuffix(child) => visit(child, seen),
        Doc::IfBreak {
            broken,
            flat,
            group_id,
        } => {
            if let Some(id) = group_id {
                if !seen.contains(id) {
                    return Err(DocError::UnresolvedGroup { id: *id });
                }
            }
            visit(broken, seen)?;
            visit(flat, seen)
        }
        Doc::Fill(parts) | Doc::Concat(parts) => {
            for part in parts {
                visit(part, seen)?;
            }
            Ok(())
        }
    }
}
