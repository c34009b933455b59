//! Tree walker turning AST nodes into documents.
//!
//! [`Driver`] is the seam between the layout policies (sequences, blocks)
//! and the walker: policies ask the driver to print child nodes and hand
//! out group ids, without knowing how any particular node kind prints.

use tern_doc::{docs, group, hardline, if_break, indent, join, line, nil, softline, text};
use tern_doc::{Doc, Group, GroupId, GroupIdGen};
use tern_ir::{Block, BlockKind, MethodKind, Node, NodeKind};

use crate::block::{print_block, BlockOwner};
use crate::comments::{print_comments, print_dangling};
use crate::sequence::{print_sequence, SequenceKind};
use crate::statement::blank_line_between;
use crate::{FormatConfig, FormatError};

/// Services the layout policies need from the tree walker.
pub trait Driver {
    fn config(&self) -> &FormatConfig;

    /// A group id unique within the current print call.
    fn next_group_id(&mut self) -> GroupId;

    /// Print a child node together with its leading and trailing comments.
    fn print(&mut self, node: &Node) -> Result<Doc, FormatError>;

    /// Print the dangling comments of `node`; see [`print_dangling`].
    fn print_dangling_comments(&mut self, node: &Node, same_indent: bool) -> Doc;
}

/// Walks a tree once, producing a single document.
pub struct Printer {
    config: FormatConfig,
    group_ids: GroupIdGen,
}

impl Driver for Printer {
    fn config(&self) -> &FormatConfig {
        &self.config
    }

    fn next_group_id(&mut self) -> GroupId {
        self.group_ids.next_id()
    }

    fn print(&mut self, node: &Node) -> Result<Doc, FormatError> {
        let printed = self.print_node(node)?;
        Ok(print_comments(node, printed))
    }

    fn print_dangling_comments(&mut self, node: &Node, same_indent: bool) -> Doc {
        print_dangling(node, same_indent)
    }
}

impl Printer {
    pub fn new(config: FormatConfig) -> Self {
        Printer {
            config,
            group_ids: GroupIdGen::new(),
        }
    }

    fn print_node(&mut self, node: &Node) -> Result<Doc, FormatError> {
        let doc = match &node.kind {
            NodeKind::NumericLiteral(raw)
            | NodeKind::StringLiteral(raw)
            | NodeKind::Identifier(raw) => text(raw.clone()),

            NodeKind::Unary { operator, argument } => {
                // Word operators need a space before their operand.
                let space = if operator.chars().all(char::is_alphabetic) {
                    " "
                } else {
                    ""
                };
                docs![operator.clone(), space, self.print(argument)?]
            }

            NodeKind::Array(seq) => print_sequence(self, node, seq, SequenceKind::Array)?,
            NodeKind::Tuple(seq) => print_sequence(self, node, seq, SequenceKind::Tuple)?,
            NodeKind::Object { properties } => self.print_object(node, properties)?,
            NodeKind::Property { key, value } => {
                docs![self.print(key)?, ": ", self.print(value)?]
            }
            NodeKind::Rest(argument) | NodeKind::Spread(argument) => {
                docs!["...", self.print(argument)?]
            }

            NodeKind::ExpressionStatement(expr) => docs![self.print(expr)?, ";"],
            NodeKind::Return(None) => text("return;"),
            NodeKind::Return(Some(argument)) => docs!["return ", self.print(argument)?, ";"],
            NodeKind::EmptyStatement => nil(),
            NodeKind::Directive(raw) => docs![raw.clone(), ";"],

            NodeKind::Block(block) => {
                let owner = match block.kind {
                    BlockKind::Program => BlockOwner::Program,
                    BlockKind::ClassBody => BlockOwner::Class,
                    BlockKind::Statement | BlockKind::StaticBlock => BlockOwner::Statement,
                };
                print_block(self, node, block, owner)?
            }

            NodeKind::If {
                test,
                consequent,
                alternate,
            } => self.print_if(test, consequent, alternate.as_deref())?,

            NodeKind::While { test, body } => docs![
                "while (",
                self.print(test)?,
                ")",
                self.print_clause(body, BlockOwner::Loop)?
            ],

            NodeKind::DoWhile { body, test } => {
                let before_while = if is_block(body) { text(" ") } else { hardline() };
                docs![
                    "do",
                    self.print_clause(body, BlockOwner::Loop)?,
                    before_while,
                    "while (",
                    self.print(test)?,
                    ");"
                ]
            }

            NodeKind::For {
                init,
                test,
                update,
                body,
            } => self.print_for(init.as_deref(), test.as_deref(), update.as_deref(), body)?,

            NodeKind::Try {
                block,
                handler,
                finalizer,
            } => {
                let mut parts = vec![
                    text("try "),
                    self.print_body(block, BlockOwner::Statement)?,
                ];
                if let Some(handler) = handler {
                    let catch = self.print_catch(handler, finalizer.is_some())?;
                    parts.push(text(" "));
                    parts.push(print_comments(handler, catch));
                }
                if let Some(finalizer) = finalizer {
                    parts.push(text(" finally "));
                    parts.push(self.print_body(finalizer, BlockOwner::Statement)?);
                }
                Doc::Concat(parts)
            }

            NodeKind::CatchClause { .. } => self.print_catch(node, false)?,

            NodeKind::Function { name, params, body } => docs![
                "function ",
                name.clone(),
                self.print_params(params)?,
                " ",
                self.print_body(body, BlockOwner::Function)?
            ],

            NodeKind::Class {
                name,
                superclass,
                body,
            } => {
                let extends = match superclass {
                    Some(superclass) => docs![" extends ", self.print(superclass)?],
                    None => nil(),
                };
                docs![
                    "class ",
                    name.clone(),
                    extends,
                    " ",
                    self.print_body(body, BlockOwner::Class)?
                ]
            }

            NodeKind::ClassProperty {
                key,
                value,
                is_static,
                is_private,
            } => {
                let value = match value {
                    Some(value) => docs![" = ", self.print(value)?],
                    None => nil(),
                };
                docs![
                    member_modifiers(*is_static, *is_private),
                    key.clone(),
                    value,
                    ";"
                ]
            }

            NodeKind::ClassMethod {
                kind,
                key,
                params,
                body,
                is_static,
                is_private,
            } => {
                let owner = if kind.is_accessor() {
                    BlockOwner::Accessor {
                        span_len: node
                            .loc
                            .map(|loc| loc.span)
                            .filter(|span| !span.is_empty())
                            .map(|span| span.len()),
                    }
                } else {
                    BlockOwner::Function
                };
                let accessor = match kind {
                    MethodKind::Get => "get ",
                    MethodKind::Set => "set ",
                    MethodKind::Method | MethodKind::Constructor => "",
                };
                let hash = if *is_private { "#" } else { "" };
                docs![
                    member_modifiers(*is_static, false),
                    accessor,
                    hash,
                    key.clone(),
                    self.print_params(params)?,
                    " ",
                    self.print_body(body, owner)?
                ]
            }

            NodeKind::DeclareModule { name, body } => docs![
                "declare module ",
                name.clone(),
                " ",
                self.print_body(body, BlockOwner::Declaration)?
            ],
        };
        Ok(doc)
    }

    /// Print a node that must be a block, as the body of `owner`.
    fn print_body(&mut self, body: &Node, owner: BlockOwner) -> Result<Doc, FormatError> {
        let block = expect_block(body)?;
        let printed = print_block(self, body, block, owner)?;
        Ok(print_comments(body, printed))
    }

    /// Body of a control statement: ` {...}` for blocks, otherwise the
    /// statement indented on the next line when it does not fit.
    fn print_clause(&mut self, body: &Node, owner: BlockOwner) -> Result<Doc, FormatError> {
        if is_block(body) {
            return Ok(docs![" ", self.print_body(body, owner)?]);
        }
        Ok(group(indent(docs![line(), self.print(body)?])))
    }

    fn print_if(
        &mut self,
        test: &Node,
        consequent: &Node,
        alternate: Option<&Node>,
    ) -> Result<Doc, FormatError> {
        let mut parts = vec![
            text("if ("),
            self.print(test)?,
            text(")"),
            self.print_clause(consequent, BlockOwner::Statement)?,
        ];

        if let Some(alternate) = alternate {
            parts.push(if is_block(consequent) {
                text(" ")
            } else {
                hardline()
            });
            parts.push(text("else"));
            if matches!(alternate.kind, NodeKind::If { .. }) {
                parts.push(text(" "));
                parts.push(self.print(alternate)?);
            } else {
                parts.push(self.print_clause(alternate, BlockOwner::Statement)?);
            }
        }

        Ok(Doc::Concat(parts))
    }

    fn print_for(
        &mut self,
        init: Option<&Node>,
        test: Option<&Node>,
        update: Option<&Node>,
        body: &Node,
    ) -> Result<Doc, FormatError> {
        let body = self.print_clause(body, BlockOwner::Loop)?;
        if init.is_none() && test.is_none() && update.is_none() {
            return Ok(docs!["for (;;)", body]);
        }

        let mut header = Vec::with_capacity(3);
        for part in [init, test, update] {
            header.push(match part {
                Some(node) => self.print(node)?,
                None => nil(),
            });
        }

        Ok(docs![
            group(docs![
                "for (",
                indent(docs![softline(), join(&docs![";", line()], header)]),
                softline(),
                ")"
            ]),
            body
        ])
    }

    fn print_catch(&mut self, node: &Node, has_finalizer: bool) -> Result<Doc, FormatError> {
        let NodeKind::CatchClause { param, body } = &node.kind else {
            return Err(FormatError::UnexpectedNode {
                construct: node.kind.name(),
                role: "a catch handler",
            });
        };
        let param = match param {
            Some(param) => docs!["(", self.print(param)?, ") "],
            None => nil(),
        };
        Ok(docs![
            "catch ",
            param,
            self.print_body(body, BlockOwner::Catch { has_finalizer })?
        ])
    }

    fn print_params(&mut self, params: &[Node]) -> Result<Doc, FormatError> {
        if params.is_empty() {
            return Ok(text("()"));
        }

        let printed = params
            .iter()
            .map(|param| self.print(param))
            .collect::<Result<Vec<_>, _>>()?;
        let last_is_rest = params.last().is_some_and(Node::is_rest);
        let trailing_comma = if self.config.trailing_comma.in_parameters() && !last_is_rest {
            if_break(",", "")
        } else {
            nil()
        };

        Ok(group(docs![
            "(",
            indent(docs![softline(), join(&docs![",", line()], printed), trailing_comma]),
            softline(),
            ")"
        ]))
    }

    /// `{ a: 1 }`; breaks when the source put the first property on a later
    /// line than the opening brace.
    fn print_object(&mut self, node: &Node, properties: &[Node]) -> Result<Doc, FormatError> {
        if properties.is_empty() {
            if !node.has_dangling_comments() {
                return Ok(text("{}"));
            }
            return Ok(group(docs![
                "{",
                self.print_dangling_comments(node, false),
                softline(),
                "}"
            ]));
        }

        let mut parts = Vec::with_capacity(properties.len() * 3);
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                parts.push(text(","));
                parts.push(line());
                if blank_line_between(&properties[i - 1], property)? {
                    parts.push(softline());
                }
            }
            parts.push(group(self.print(property)?));
        }

        let last_is_rest = properties.last().is_some_and(Node::is_rest);
        let trailing_comma = if self.config.trailing_comma.in_literals() && !last_is_rest {
            if_break(",", "")
        } else {
            nil()
        };
        let dangling = if node.has_dangling_comments() {
            docs![line(), self.print_dangling_comments(node, true)]
        } else {
            nil()
        };

        let first_on_later_line = match (node.start_line(), properties[0].start_line()) {
            (Some(open), Some(first)) => first > open,
            _ => false,
        };

        let printed = Group::new(docs![
            "{",
            indent(docs![line(), Doc::Concat(parts), trailing_comma, dangling]),
            line(),
            "}"
        ])
        .with_break(first_on_later_line);
        Ok(printed.into())
    }
}

fn is_block(node: &Node) -> bool {
    matches!(node.kind, NodeKind::Block(_))
}

fn expect_block(node: &Node) -> Result<&Block, FormatError> {
    match &node.kind {
        NodeKind::Block(block) => Ok(block),
        kind => Err(FormatError::UnexpectedNode {
            construct: kind.name(),
            role: "a braced body",
        }),
    }
}

fn member_modifiers(is_static: bool, is_private: bool) -> Doc {
    match (is_static, is_private) {
        (true, true) => text("static #"),
        (true, false) => text("static "),
        (false, true) => text("#"),
        (false, false) => nil(),
    }
}
