//! Property-based tests for the array printer.
//!
//! 1. Sparse trailing comma: a final hole always keeps its comma
//! 2. Width respect: concise numeric arrays never overflow except for a lone
//!    oversized token
//! 3. Shape uniformity: tables of rows break at every width
//! 4. Determinism: formatting the same tree twice is byte-identical

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tern_fmt::{format_program, FormatConfig, TrailingComma};
use tern_ir::Node;

fn number_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[1-9][0-9]{0,5}").expect("valid regex")
}

fn trailing_comma_strategy() -> impl Strategy<Value = TrailingComma> {
    prop_oneof![
        Just(TrailingComma::None),
        Just(TrailingComma::Es5),
        Just(TrailingComma::All),
    ]
}

fn numbers_on_one_line(values: &[String]) -> Node {
    Node::array(
        values
            .iter()
            .map(|v| Some(Node::number(v.clone()).on_lines(1, 1)))
            .collect(),
    )
    .on_lines(1, 1)
}

proptest! {
    #[test]
    fn final_hole_keeps_comma(
        values in prop::collection::vec(number_strategy(), 0..12),
        trailing_comma in trailing_comma_strategy(),
        width in 8usize..80,
    ) {
        let mut elements: Vec<Option<Node>> = values
            .iter()
            .map(|v| Some(Node::number(v.clone()).on_lines(1, 1)))
            .collect();
        elements.push(None);
        let node = Node::array(elements).on_lines(1, 1);
        let config = FormatConfig {
            trailing_comma,
            ..FormatConfig::with_print_width(width)
        };

        let out = format_program(&node, &config).unwrap();
        let before_bracket = out.trim_end_matches(']').trim_end();
        prop_assert!(before_bracket.ends_with(','), "no trailing comma in {:?}", out);
    }

    #[test]
    fn concise_lines_respect_width(
        values in prop::collection::vec(number_strategy(), 2..40),
        width in 10usize..60,
    ) {
        let out = format_program(&numbers_on_one_line(&values), &FormatConfig::with_print_width(width)).unwrap();
        for line in out.lines() {
            let single_token = !line.trim().contains(' ');
            prop_assert!(
                line.chars().count() <= width || single_token,
                "line {:?} exceeds width {}", line, width
            );
        }
    }

    #[test]
    fn uniform_rows_always_break(
        row_count in 2usize..6,
        row_len in 2usize..5,
        width in 20usize..400,
    ) {
        let rows: Vec<Option<Node>> = (0..row_count)
            .map(|_| {
                let values: Vec<String> = (1..=row_len).map(|n| n.to_string()).collect();
                Some(numbers_on_one_line(&values))
            })
            .collect();
        let node = Node::array(rows).on_lines(1, 1);

        let out = format_program(&node, &FormatConfig::with_print_width(width)).unwrap();
        prop_assert_eq!(out.lines().count(), row_count + 2);
    }

    #[test]
    fn formatting_is_deterministic(
        values in prop::collection::vec(number_strategy(), 0..30),
        width in 10usize..80,
        matrix in any::<bool>(),
    ) {
        let config = FormatConfig {
            matrix_arrays: matrix,
            ..FormatConfig::with_print_width(width)
        };
        let node = numbers_on_one_line(&values);
        let first = format_program(&node, &config).unwrap();
        let second = format_program(&node, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
