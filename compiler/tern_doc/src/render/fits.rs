//! Bounded look-ahead: does the next stretch of output fit?

use super::{text_width, Command, Item, Mode, Renderer};
use crate::Doc;

impl<'d> Renderer<'d> {
    /// Check whether `next`, followed by the pending commands, fits in the
    /// remaining width up to the first line break.
    ///
    /// `with_rest` continues into the renderer's stack once `next` is
    /// exhausted (group decisions); fill decisions look at their own window
    /// only. With `must_be_flat`, any group that is already forced to break
    /// makes the content not fit.
    pub(super) fn fits(&self, next: Command<'d>, with_rest: bool, must_be_flat: bool) -> bool {
        let rest: &[Command<'d>] = if with_rest { &self.stack } else { &[] };
        let mut rest_idx = rest.len();
        let mut width = self.remaining_width();
        let mut cmds: Vec<(Mode, Item<'d>)> = vec![(next.mode, next.item)];

        while width >= 0 {
            let (mode, item) = match cmds.pop() {
                Some(entry) => entry,
                None => {
                    if rest_idx == 0 {
                        return true;
                    }
                    rest_idx -= 1;
                    (rest[rest_idx].mode, rest[rest_idx].item)
                }
            };

            let doc = match item {
                Item::Doc(doc) => doc,
                Item::Parts(parts) | Item::Fill(parts) => {
                    cmds.extend(parts.iter().rev().map(|part| (mode, Item::Doc(part))));
                    continue;
                }
            };

            match doc {
                Doc::Nil | Doc::BreakParent | Doc::LineSuffix(_) => {}
                Doc::Text(s) => width -= super::to_isize(text_width(s)),
                Doc::Concat(parts) | Doc::Fill(parts) => {
                    cmds.extend(parts.iter().rev().map(|part| (mode, Item::Doc(part))));
                }
                Doc::Indent(child) => cmds.push((mode, Item::Doc(child))),
                Doc::Group(group) => {
                    if must_be_flat && group.should_break() {
                        return false;
                    }
                    let group_mode = if group.should_break() {
                        Mode::Break
                    } else {
                        mode
                    };
                    cmds.push((group_mode, Item::Doc(group.contents())));
                }
                Doc::IfBreak {
                    broken,
                    flat,
                    group_id,
                } => {
                    let chosen = match self.mode_of(*group_id, mode) {
                        Mode::Break => broken,
                        Mode::Flat => flat,
                    };
                    cmds.push((mode, Item::Doc(chosen)));
                }
                Doc::Line => {
                    if mode == Mode::Break {
                        return true;
                    }
                    width -= 1;
                }
                Doc::SoftLine => {
                    if mode == Mode::Break {
                        return true;
                    }
                }
                // Everything after a forced newline starts a fresh line.
                Doc::HardLine => return true,
            }
        }

        false
    }
}
