//! Width-constrained renderer for the document IR.
//!
//! A single top-down pass over an explicit command stack. Each group is
//! tried flat first: if its flat form, followed by whatever comes after it
//! up to the next possible line break, fits in the remaining width, it is
//! printed flat; otherwise broken. Resolved modes of named groups are
//! recorded as the pass reaches them, which is what `IfBreak` with a group id
//! reads.

mod fits;

use rustc_hash::FxHashMap;

use crate::{validate, Doc, DocError, GroupId};

/// Rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum line width before groups break.
    pub max_width: usize,
    /// Spaces per indentation level.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: 80,
            indent_width: 2,
        }
    }
}

/// Whether a group is laid out on one line or across several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Flat,
    Break,
}

/// What a command points at.
///
/// `Parts` and `Fill` address a slice of an existing node so that neither
/// the concatenation probe of a fill nor its remainder needs a new `Doc`.
#[derive(Debug, Clone, Copy)]
enum Item<'d> {
    Doc(&'d Doc),
    Parts(&'d [Doc]),
    Fill(&'d [Doc]),
}

/// A unit of pending work on the renderer's stack.
#[derive(Debug, Clone, Copy)]
struct Command<'d> {
    indent: usize,
    mode: Mode,
    item: Item<'d>,
}

impl<'d> Command<'d> {
    fn new(indent: usize, mode: Mode, doc: &'d Doc) -> Self {
        Command {
            indent,
            mode,
            item: Item::Doc(doc),
        }
    }

    fn with_item(self, mode: Mode, item: Item<'d>) -> Self {
        Command {
            indent: self.indent,
            mode,
            item,
        }
    }
}

/// Render a document to text.
///
/// Validates the tree first; once validation passes rendering cannot fail.
/// Trailing spaces are trimmed from every line.
#[tracing::instrument(level = "trace", skip_all, fields(max_width = options.max_width))]
pub fn render(doc: &Doc, options: &RenderOptions) -> Result<String, DocError> {
    validate(doc)?;
    let mut renderer = Renderer::new(*options);
    renderer.run(doc);
    Ok(renderer.out)
}

struct Renderer<'d> {
    options: RenderOptions,
    out: String,
    column: usize,
    stack: Vec<Command<'d>>,
    line_suffix: Vec<Command<'d>>,
    group_modes: FxHashMap<GroupId, Mode>,
}

impl<'d> Renderer<'d> {
    fn new(options: RenderOptions) -> Self {
        Renderer {
            options,
            out: String::new(),
            column: 0,
            stack: Vec::new(),
            line_suffix: Vec::new(),
            group_modes: FxHashMap::default(),
        }
    }

    fn run(&mut self, doc: &'d Doc) {
        self.stack.push(Command::new(0, Mode::Break, doc));

        loop {
            let Some(cmd) = self.stack.pop() else {
                if self.line_suffix.is_empty() {
                    break;
                }
                self.flush_line_suffix();
                continue;
            };

            match cmd.item {
                Item::Parts(parts) => self.push_parts(cmd, parts),
                Item::Fill(parts) => self.fill(cmd, parts),
                Item::Doc(doc) => self.doc(cmd, doc),
            }
        }
    }

    fn doc(&mut self, cmd: Command<'d>, doc: &'d Doc) {
        match doc {
            Doc::Nil | Doc::BreakParent => {}

            Doc::Text(s) => {
                self.out.push_str(s);
                self.column += text_width(s);
            }

            Doc::Concat(parts) => self.push_parts(cmd, parts),

            Doc::Indent(child) => {
                self.stack.push(Command::new(
                    cmd.indent + self.options.indent_width,
                    cmd.mode,
                    child,
                ));
            }

            Doc::Group(group) => {
                let contents = group.contents();
                let mode = if group.should_break() {
                    Mode::Break
                } else if cmd.mode == Mode::Flat {
                    Mode::Flat
                } else {
                    let probe = Command::new(cmd.indent, Mode::Flat, contents);
                    if self.fits(probe, true, false) {
                        Mode::Flat
                    } else {
                        Mode::Break
                    }
                };
                if let Some(id) = group.id() {
                    self.group_modes.insert(id, mode);
                }
                self.stack.push(Command::new(cmd.indent, mode, contents));
            }

            Doc::IfBreak {
                broken,
                flat,
                group_id,
            } => {
                let mode = self.mode_of(*group_id, cmd.mode);
                let chosen = match mode {
                    Mode::Break => broken,
                    Mode::Flat => flat,
                };
                self.stack.push(Command::new(cmd.indent, cmd.mode, chosen));
            }

            Doc::Fill(parts) => self.fill(cmd, parts),

            Doc::LineSuffix(child) => {
                self.line_suffix
                    .push(Command::new(cmd.indent, cmd.mode, child));
            }

            Doc::Line | Doc::SoftLine if cmd.mode == Mode::Flat => {
                if matches!(doc, Doc::Line) {
                    self.out.push(' ');
                    self.column += 1;
                }
            }

            Doc::Line | Doc::SoftLine | Doc::HardLine => {
                if self.line_suffix.is_empty() {
                    self.newline(cmd.indent);
                } else {
                    // Print deferred suffixes first, then come back to this break.
                    self.stack.push(cmd);
                    self.flush_line_suffix();
                }
            }
        }
    }

    /// Lay out a fill one (content, separator, content) window at a time.
    fn fill(&mut self, cmd: Command<'d>, parts: &'d [Doc]) {
        let Some(content) = parts.first() else {
            return;
        };
        let content_flat = Command::new(cmd.indent, Mode::Flat, content);
        let content_break = Command::new(cmd.indent, Mode::Break, content);
        let content_fits = self.fits(content_flat, false, true);

        let Some(separator) = parts.get(1) else {
            self.stack
                .push(if content_fits { content_flat } else { content_break });
            return;
        };
        let separator_flat = Command::new(cmd.indent, Mode::Flat, separator);
        let separator_break = Command::new(cmd.indent, Mode::Break, separator);

        if parts.len() == 2 {
            if content_fits {
                self.stack.push(separator_flat);
                self.stack.push(content_flat);
            } else {
                self.stack.push(separator_break);
                self.stack.push(content_break);
            }
            return;
        }

        let remainder = cmd.with_item(cmd.mode, Item::Fill(&parts[2..]));
        let pair = cmd.with_item(Mode::Flat, Item::Parts(&parts[..3]));
        let pair_fits = self.fits(pair, false, true);

        self.stack.push(remainder);
        if pair_fits {
            self.stack.push(separator_flat);
            self.stack.push(content_flat);
        } else if content_fits {
            self.stack.push(separator_break);
            self.stack.push(content_flat);
        } else {
            self.stack.push(separator_break);
            self.stack.push(content_break);
        }
    }

    fn push_parts(&mut self, cmd: Command<'d>, parts: &'d [Doc]) {
        for part in parts.iter().rev() {
            self.stack.push(Command::new(cmd.indent, cmd.mode, part));
        }
    }

    fn flush_line_suffix(&mut self) {
        while let Some(suffix) = self.line_suffix.pop() {
            self.stack.push(suffix);
        }
    }

    /// Resolved mode of a named group, or `current` for the enclosing group.
    ///
    /// Validation guarantees named groups are reached first; a group that
    /// only exists inside an unchosen conditional branch reads as flat.
    fn mode_of(&self, group_id: Option<GroupId>, current: Mode) -> Mode {
        match group_id {
            Some(id) => self.group_modes.get(&id).copied().unwrap_or(Mode::Flat),
            None => current,
        }
    }

    fn remaining_width(&self) -> isize {
        to_isize(self.options.max_width) - to_isize(self.column)
    }

    fn newline(&mut self, indent: usize) {
        let trimmed = self.out.trim_end_matches([' ', '\t']).len();
        self.out.truncate(trimmed);
        self.out.push('\n');
        self.out.extend(std::iter::repeat(' ').take(indent));
        self.column = indent;
    }
}

/// Display width of a text fragment.
fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
