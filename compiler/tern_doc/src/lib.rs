//! Tern Doc - Document IR and Renderer
//!
//! A small algebra of layout primitives and the algorithm that turns a tree
//! of them into width-constrained text.
//!
//! # Architecture
//!
//! 1. **Build**: printers assemble a [`Doc`] tree with the builders in [`doc`].
//!    Groups compute their forced-break flag at construction, so a tree is
//!    immutable once built.
//! 2. **Validate**: [`validate`] checks that every cross-group conditional
//!    names a group that is resolved before it.
//! 3. **Render**: [`render`] walks the tree once, deciding flat or broken per
//!    group with a bounded look-ahead, and per separator inside a fill.
//!
//! The IR knows nothing about the source language.

pub mod doc;
mod error;
mod render;
mod validate;

pub use doc::{
    break_parent, fill, group, hardline, if_break, if_break_in, indent, join, line, line_suffix,
    nil, softline, text, Doc, Group, GroupId, GroupIdGen,
};
pub use error::DocError;
pub use render::{render, Mode, RenderOptions};
pub use validate::validate;
