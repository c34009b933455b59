#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end formatting scenarios.
//!
//! Trees are built by hand with explicit line metadata. Idempotence is
//! checked by building a second tree whose line numbers match the first
//! output and formatting it again.

use pretty_assertions::assert_eq;
use tern_fmt::{format_program, format_programs, FormatConfig, FormatError, TrailingComma};
use tern_ir::{BlockKind, MethodKind, Node, NodeKind, SourceLoc, Span};

// -- Builders --

fn num(raw: &str, line: u32) -> Node {
    Node::number(raw).on_lines(line, line)
}

fn stmt(name: &str, line: u32) -> Node {
    Node::expression_statement(Node::ident(name).on_lines(line, line)).on_lines(line, line)
}

fn array(elements: Vec<Node>, start: u32, end: u32) -> Node {
    Node::array(elements.into_iter().map(Some).collect()).on_lines(start, end)
}

fn ret(argument: Node, start: u32, end: u32) -> Node {
    Node::new(NodeKind::Return(Some(Box::new(argument)))).on_lines(start, end)
}

fn program(body: Vec<Node>, end: u32) -> Node {
    Node::block(BlockKind::Program, vec![], body).on_lines(1, end)
}

fn function(body: Vec<Node>, start: u32, end: u32) -> Node {
    Node::new(NodeKind::Function {
        name: "f".to_owned(),
        params: vec![],
        body: Box::new(Node::block(BlockKind::Statement, vec![], body).on_lines(start, end)),
    })
    .on_lines(start, end)
}

/// `[1, 2, 3, 4]` with each element on the given source line.
fn grid(lines: [u32; 4], start: u32, end: u32) -> Node {
    array(
        ["1", "2", "3", "4"]
            .into_iter()
            .zip(lines)
            .map(|(raw, line)| num(raw, line))
            .collect(),
        start,
        end,
    )
}

fn config() -> FormatConfig {
    FormatConfig::default()
}

// -- Scenarios --

#[test]
fn sparse_array_keeps_trailing_comma_with_none() {
    let node = Node::array(vec![Some(num("1", 1)), None]).on_lines(1, 1);
    let config = FormatConfig {
        trailing_comma: TrailingComma::None,
        ..config()
    };
    assert_eq!(format_program(&node, &config).unwrap(), "[1, ,]");
}

#[test]
fn matrix_rows_survive_only_in_matrix_mode() {
    let node = grid([2, 2, 3, 3], 1, 4);
    let matrix = FormatConfig {
        matrix_arrays: true,
        ..config()
    };
    assert_eq!(
        format_program(&node, &matrix).unwrap(),
        "[\n  1, 2,\n  3, 4,\n]"
    );
    assert_eq!(format_program(&node, &config()).unwrap(), "[1, 2, 3, 4]");
}

#[test]
fn blank_line_after_brace_is_reproduced() {
    let preserve = FormatConfig {
        preserve_blank_lines: true,
        ..config()
    };
    let one_blank = program(vec![function(vec![stmt("a", 3)], 1, 4)], 4);
    assert_eq!(
        format_program(&one_blank, &preserve).unwrap(),
        "function f() {\n\n  a;\n}\n"
    );

    let two_blank = program(vec![function(vec![stmt("a", 4)], 1, 5)], 5);
    assert_eq!(
        format_program(&two_blank, &preserve).unwrap(),
        "function f() {\n\n\n  a;\n}\n"
    );
}

#[test]
fn accessor_collapses_only_when_enabled() {
    let body = Node::block(
        BlockKind::Statement,
        vec![],
        vec![ret(num("1", 2), 2, 2)],
    )
    .on_lines(2, 2);
    let getter = Node::new(NodeKind::ClassMethod {
        kind: MethodKind::Get,
        key: "x".to_owned(),
        params: vec![],
        body: Box::new(body),
        is_static: false,
        is_private: false,
    })
    .at(SourceLoc::new(Span::new(12, 34), 2, 2));
    let class = Node::new(NodeKind::Class {
        name: "A".to_owned(),
        superclass: None,
        body: Box::new(Node::block(BlockKind::ClassBody, vec![], vec![getter]).on_lines(1, 3)),
    })
    .on_lines(1, 3);

    let collapse = FormatConfig {
        accessor_one_line: true,
        ..config()
    };
    assert_eq!(
        format_program(&class, &collapse).unwrap(),
        "class A {\n  get x() { return 1; }\n}"
    );
    assert_eq!(
        format_program(&class, &config()).unwrap(),
        "class A {\n  get x() {\n    return 1;\n  }\n}"
    );
}

#[test]
fn uniform_rows_force_break_at_any_width() {
    let rows = array(
        vec![
            array(vec![num("1", 1), num("2", 1)], 1, 1),
            array(vec![num("3", 1), num("4", 1)], 1, 1),
        ],
        1,
        1,
    );
    for width in [20, 80, 400] {
        assert_eq!(
            format_program(&rows, &FormatConfig::with_print_width(width)).unwrap(),
            "[\n  [1, 2],\n  [3, 4],\n]"
        );
    }

    let ragged = array(
        vec![
            array(vec![num("1", 1), num("2", 1)], 1, 1),
            array(vec![num("3", 1)], 1, 1),
        ],
        1,
        1,
    );
    assert_eq!(format_program(&ragged, &config()).unwrap(), "[[1, 2], [3]]");
}

#[test]
fn invalid_config_is_reported_before_printing() {
    let node = program(vec![stmt("a", 1)], 1);
    assert!(matches!(
        format_program(&node, &FormatConfig::with_print_width(0)),
        Err(FormatError::Config(_))
    ));
}

#[test]
fn parallel_formatting_preserves_order() {
    let programs: Vec<Node> = ["a", "b", "c", "d"]
        .iter()
        .map(|name| program(vec![stmt(name, 1)], 1))
        .collect();
    let outputs: Vec<String> = format_programs(&programs, &config())
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(outputs, vec!["a;\n", "b;\n", "c;\n", "d;\n"]);
}

// -- Idempotence --

/// ```text
/// function f() {
///
///   a;
///   return [<row>
///     <row>];
/// }
/// ```
fn matrix_function(lines: FunctionLines) -> Node {
    let array = grid(lines.elements, lines.array.0, lines.array.1);
    let body = vec![stmt("a", lines.statement), ret(array, lines.array.0, lines.array.1)];
    program(vec![function(body, 1, lines.end)], lines.end)
}

struct FunctionLines {
    statement: u32,
    array: (u32, u32),
    elements: [u32; 4],
    end: u32,
}

#[test]
fn formatting_formatted_output_is_stable() {
    let config = FormatConfig {
        matrix_arrays: true,
        preserve_blank_lines: true,
        ..config()
    };

    let source = matrix_function(FunctionLines {
        statement: 3,
        array: (4, 5),
        elements: [4, 4, 5, 5],
        end: 6,
    });
    let first = format_program(&source, &config).unwrap();
    assert_eq!(
        first,
        "function f() {\n\n  a;\n  return [\n    1, 2,\n    3, 4,\n  ];\n}\n"
    );

    // The same tree as it appears in `first`.
    let reformatted = matrix_function(FunctionLines {
        statement: 3,
        array: (4, 7),
        elements: [5, 5, 6, 6],
        end: 8,
    });
    assert_eq!(format_program(&reformatted, &config).unwrap(), first);
}

#[test]
fn wrapped_fill_is_stable() {
    let config = FormatConfig::with_print_width(20);
    let values: Vec<String> = (1..=9).map(|n| format!("{n}00")).collect();

    let source = array(values.iter().map(|v| num(v, 1)).collect(), 1, 1);
    let first = format_program(&source, &config).unwrap();
    assert_eq!(
        first,
        "[\n  100, 200, 300,\n  400, 500, 600,\n  700, 800, 900,\n]"
    );

    let reformatted = array(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| num(v, 2 + u32::try_from(i / 3).unwrap()))
            .collect(),
        1,
        5,
    );
    assert_eq!(format_program(&reformatted, &config).unwrap(), first);
}
