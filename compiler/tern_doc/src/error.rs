//! Document construction errors.

use crate::GroupId;

/// A malformed document tree.
///
/// These are programming errors in the printer layer that built the tree;
/// a well-formed tree always renders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocError {
    /// An `IfBreak` names a group that does not enclose or precede it.
    #[error("conditional content refers to group {id}, which is not resolved before it")]
    UnresolvedGroup { id: GroupId },
}
