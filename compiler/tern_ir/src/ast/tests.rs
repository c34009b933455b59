use super::*;
use crate::Comment;
use pretty_assertions::assert_eq;

fn loc(start: u32, end: u32) -> SourceLoc {
    SourceLoc::lines(start, end)
}

#[test]
fn effective_start_uses_earlier_comment() {
    let node = Node::ident("x")
        .on_lines(5, 5)
        .with_comment(Comment::leading_line("// note", loc(3, 3)));
    assert_eq!(node.effective_start_line(), Some(3));
}

#[test]
fn effective_start_ignores_same_line_comment() {
    let node = Node::ident("x")
        .on_lines(5, 5)
        .with_comment(Comment::trailing_line("// note", loc(5, 5)));
    assert_eq!(node.effective_start_line(), Some(5));
}

#[test]
fn effective_end_uses_later_comment() {
    let node = Node::ident("x")
        .on_lines(2, 4)
        .with_comment(Comment::trailing_line("// tail", loc(6, 6)));
    assert_eq!(node.effective_end_line(), Some(6));
}

#[test]
fn effective_lines_without_location() {
    let node = Node::ident("x");
    assert_eq!(node.effective_start_line(), None);
    assert_eq!(node.effective_end_line(), None);
}

#[test]
fn signed_numeric_literal() {
    let neg = Node::new(NodeKind::Unary {
        operator: "-".into(),
        argument: Box::new(Node::number("1")),
    });
    let not = Node::new(NodeKind::Unary {
        operator: "!".into(),
        argument: Box::new(Node::number("1")),
    });
    let neg_ident = Node::new(NodeKind::Unary {
        operator: "-".into(),
        argument: Box::new(Node::ident("x")),
    });
    assert!(neg.is_signed_numeric_literal());
    assert!(!not.is_signed_numeric_literal());
    assert!(!neg_ident.is_signed_numeric_literal());
}

#[test]
fn private_member_detection() {
    let private = Node::new(NodeKind::ClassProperty {
        key: "count".into(),
        value: None,
        is_static: false,
        is_private: true,
    });
    let public = Node::new(NodeKind::ClassProperty {
        key: "count".into(),
        value: None,
        is_static: false,
        is_private: false,
    });
    assert!(private.is_private_member());
    assert!(!public.is_private_member());
    assert!(!Node::ident("x").is_private_member());
}

#[test]
fn literal_item_count_counts_holes() {
    let array = Node::array(vec![Some(Node::number("1")), None]);
    assert_eq!(array.literal_item_count(), Some(2));
    assert_eq!(Node::ident("x").literal_item_count(), None);
}

#[test]
fn construct_names_distinguish_block_kinds() {
    let program = Node::block(BlockKind::Program, vec![], vec![]);
    let class_body = Node::block(BlockKind::ClassBody, vec![], vec![]);
    assert_eq!(program.kind.name(), "program");
    assert_eq!(class_body.kind.name(), "class body");
    assert_eq!(Node::number("1").kind.name(), "numeric literal");
}
