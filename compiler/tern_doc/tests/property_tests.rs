//! Property-based tests for the document renderer.
//!
//! Random document trees are generated and the renderer is checked for:
//! 1. Determinism: the same tree renders identically twice
//! 2. Flat-when-fits: a group whose flat form fits renders on one line
//! 3. Width respect: fill never produces an over-long line of several words
//! 4. Forced-break propagation: any hard line marks every enclosing group

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tern_doc::{
    fill, group, hardline, if_break, indent, line, render, softline, text, Doc, Group,
    RenderOptions,
};

// -- Document Generation Strategies --

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,8}").expect("valid regex")
}

/// Documents without hard breaks.
fn soft_doc_strategy() -> impl Strategy<Value = Doc> {
    let leaf = prop_oneof![
        4 => word_strategy().prop_map(text),
        2 => Just(line()),
        1 => Just(softline()),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..6).prop_map(Doc::Concat),
            prop::collection::vec(inner.clone(), 1..6).prop_map(|parts| group(Doc::Concat(parts))),
            inner.clone().prop_map(indent),
            (inner.clone(), inner).prop_map(|(broken, flat)| if_break(broken, flat)),
        ]
    })
}

/// Documents that may contain hard breaks.
fn any_doc_strategy() -> impl Strategy<Value = Doc> {
    let leaf = prop_oneof![
        4 => word_strategy().prop_map(text),
        2 => Just(line()),
        1 => Just(hardline()),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..6).prop_map(Doc::Concat),
            prop::collection::vec(inner.clone(), 1..6).prop_map(|parts| group(Doc::Concat(parts))),
            inner.prop_map(indent),
        ]
    })
}

// -- Reference helpers --

fn flat_text(doc: &Doc, out: &mut String) {
    match doc {
        Doc::Text(s) => out.push_str(s),
        Doc::Line => out.push(' '),
        Doc::Group(group) => flat_text(group.contents(), out),
        Doc::Indent(child) | Doc::LineSuffix(child) => flat_text(child, out),
        Doc::IfBreak { flat, .. } => flat_text(flat, out),
        Doc::Concat(parts) | Doc::Fill(parts) => {
            for part in parts {
                flat_text(part, out);
            }
        }
        Doc::Nil | Doc::SoftLine | Doc::HardLine | Doc::BreakParent => {}
    }
}

fn contains_hardline(doc: &Doc) -> bool {
    match doc {
        Doc::HardLine => true,
        Doc::Group(group) => contains_hardline(group.contents()),
        Doc::Indent(child) | Doc::LineSuffix(child) => contains_hardline(child),
        Doc::IfBreak { broken, flat, .. } => contains_hardline(broken) || contains_hardline(flat),
        Doc::Concat(parts) | Doc::Fill(parts) => parts.iter().any(contains_hardline),
        _ => false,
    }
}

fn options(max_width: usize) -> RenderOptions {
    RenderOptions {
        max_width,
        indent_width: 2,
    }
}

proptest! {
    #[test]
    fn rendering_is_deterministic(doc in any_doc_strategy(), width in 4usize..60) {
        let first = render(&doc, &options(width)).unwrap();
        let second = render(&doc, &options(width)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fitting_group_renders_flat(doc in soft_doc_strategy(), width in 4usize..120) {
        let root = group(doc);
        let mut flat = String::new();
        flat_text(&root, &mut flat);
        let rendered = render(&root, &options(width)).unwrap();
        if flat.chars().count() <= width {
            prop_assert_eq!(rendered, flat);
        }
    }

    #[test]
    fn no_line_has_trailing_spaces(doc in any_doc_strategy(), width in 4usize..60) {
        let rendered = render(&doc, &options(width)).unwrap();
        for line in rendered.lines() {
            prop_assert!(!line.ends_with(' '), "trailing space in {:?}", line);
        }
    }

    #[test]
    fn fill_lines_respect_width(
        words in prop::collection::vec(word_strategy(), 1..40),
        width in 4usize..40,
    ) {
        let mut parts = Vec::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                parts.push(line());
            }
            parts.push(text(word.clone()));
        }
        let rendered = render(&fill(parts), &options(width)).unwrap();
        for out_line in rendered.lines() {
            let is_single_word = !out_line.contains(' ');
            prop_assert!(
                out_line.chars().count() <= width || is_single_word,
                "line {:?} exceeds width {}", out_line, width
            );
        }
        prop_assert_eq!(rendered.split_whitespace().collect::<Vec<_>>(), words.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn hard_lines_propagate_to_every_group(doc in any_doc_strategy()) {
        let group = Group::new(doc.clone());
        prop_assert_eq!(group.should_break(), contains_hardline(&doc));
    }

    #[test]
    fn group_with_hard_line_never_renders_flat(doc in any_doc_strategy()) {
        let root = group(doc.clone());
        let rendered = render(&root, &options(1000)).unwrap();
        if contains_hardline(&doc) {
            prop_assert!(rendered.contains('\n'));
        }
    }
}
