//! Navigation scenarios over hand-built trees using a grammar loaded from
//! a TOML description.

use cst_nav::{load_from_path, Grammar, MaybeNode, Node, NodeSpec, Point, Span, Tree, TreeBuilder};

const GRAMMAR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/arith.toml");

fn grammar() -> Grammar {
    load_from_path(GRAMMAR).unwrap_or_else(|err| panic!("failed to load {GRAMMAR}: {err}"))
}

struct Kinds {
    program: u16,
    binary: u16,
    integer: u16,
    paren: u16,
    comment: u16,
    plus: u16,
    star: u16,
    open: u16,
    close: u16,
}

fn kinds(grammar: &Grammar) -> Kinds {
    let id = |kind: &str| grammar.kind_id(kind).unwrap();
    Kinds {
        program: id("program"),
        binary: id("binary_expression"),
        integer: id("integer"),
        paren: id("parenthesized_expression"),
        comment: id("comment"),
        plus: id("+"),
        star: id("*"),
        open: id("("),
        close: id(")"),
    }
}

/// `1 + 2` with the binary expression as root.
fn one_plus_two() -> Tree {
    let source = "1 + 2";
    let grammar = grammar();
    let k = kinds(&grammar);
    let field = |name: &str| grammar.field_id_for_name(name).unwrap();
    let (left, operator, right) = (field("left"), field("operator"), field("right"));
    let s = |range| Span::from_source(source, range);

    let mut builder = TreeBuilder::new(grammar);
    builder
        .start_node(NodeSpec::new(k.binary))
        .unwrap()
        .token(NodeSpec::new(k.integer).field(left).span(s(0..1)))
        .unwrap()
        .token(NodeSpec::new(k.plus).field(operator).span(s(2..3)))
        .unwrap()
        .token(NodeSpec::new(k.integer).field(right).span(s(4..5)))
        .unwrap()
        .finish_node()
        .unwrap();
    builder.build().unwrap()
}

const NESTED: &str = "(1 + 2) * 3 // x";

/// `(1 + 2) * 3 // x` under a program root, the comment as an extra.
fn nested() -> Tree {
    let grammar = grammar();
    let k = kinds(&grammar);
    let field = |name: &str| grammar.field_id_for_name(name).unwrap();
    let (left, operator, right) = (field("left"), field("operator"), field("right"));
    let s = |range| Span::from_source(NESTED, range);

    let mut builder = TreeBuilder::new(grammar);
    builder
        .start_node(NodeSpec::new(k.program).span(s(0..16)))
        .unwrap()
        .start_node(NodeSpec::new(k.binary))
        .unwrap()
        .start_node(NodeSpec::new(k.paren).field(left))
        .unwrap()
        .token(NodeSpec::new(k.open).span(s(0..1)))
        .unwrap()
        .start_node(NodeSpec::new(k.binary))
        .unwrap()
        .token(NodeSpec::new(k.integer).field(left).span(s(1..2)))
        .unwrap()
        .token(NodeSpec::new(k.plus).field(operator).span(s(3..4)))
        .unwrap()
        .token(NodeSpec::new(k.integer).field(right).span(s(5..6)))
        .unwrap()
        .finish_node()
        .unwrap()
        .token(NodeSpec::new(k.close).span(s(6..7)))
        .unwrap()
        .finish_node()
        .unwrap()
        .token(NodeSpec::new(k.star).field(operator).span(s(8..9)))
        .unwrap()
        .token(NodeSpec::new(k.integer).field(right).span(s(10..11)))
        .unwrap()
        .finish_node()
        .unwrap()
        .token(NodeSpec::new(k.comment).span(s(12..16)).extra())
        .unwrap()
        .finish_node()
        .unwrap();
    builder.build().unwrap()
}

fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap()
}

#[test]
fn field_lookup_on_one_plus_two() {
    let tree = one_plus_two();
    let root = tree.root_node();

    let left = root.child_by_field_name("left").unwrap();
    assert_eq!(left.kind(), "integer");
    assert_eq!((left.start_byte(), left.end_byte()), (0, 1));

    let right = root.child_by_field_name("right").unwrap();
    assert_eq!((right.start_byte(), right.end_byte()), (4, 5));

    let right_id = root.grammar().field_id_for_name("right").unwrap();
    assert_eq!(root.child_by_field_id(right_id), Some(right));
    assert_eq!(root.child_by_field_name("body"), None);
}

#[test]
fn smallest_node_for_range_on_one_plus_two() {
    let tree = one_plus_two();
    let root = tree.root_node();

    let found = root.descendant_for_byte_range(4, 5);
    assert_ne!(found, root);
    assert_eq!(Some(found), root.child_by_field_name("right"));
}

#[test]
fn first_child_for_byte_on_one_plus_two() {
    let tree = one_plus_two();
    let root = tree.root_node();

    let operator = root.first_child_for_byte(2).unwrap();
    assert_eq!(operator.kind(), "+");
    assert!(!operator.is_named());
    assert_eq!(root.field_name_for_child(1), Some("operator"));
}

#[test]
fn childless_root_spanning_twenty_bytes() {
    let grammar = grammar();
    let program = grammar.kind_id("program").unwrap();
    let span = Span::new(0, 20, Point::new(0, 0), Point::new(0, 20));
    let mut builder = TreeBuilder::new(grammar);
    builder.token(NodeSpec::new(program).span(span)).unwrap();
    let tree = builder.build().unwrap();
    let root = tree.root_node();

    assert_eq!(root.child_count(), 0);
    assert!(root.child(0).is_null());
    assert_eq!(root.first_child_for_byte(3), None);
    assert_eq!(root.descendant_for_byte_range(3, 7), root);
    assert_eq!(root.to_display_string(), "(program)");
}

#[test]
fn nested_range_lookups() {
    let tree = nested();
    let root = tree.root_node();

    assert_eq!(text(root.descendant_for_byte_range(1, 1), NESTED), "1");
    assert_eq!(root.descendant_for_byte_range(3, 4).kind(), "+");
    assert_eq!(root.named_descendant_for_byte_range(3, 4).byte_range(), 1..6);
    assert_eq!(root.descendant_for_byte_range(0, 7).kind(), "parenthesized_expression");
    assert_eq!(text(root.descendant_for_byte_range(1, 6), NESTED), "1 + 2");
    assert_eq!(root.descendant_for_byte_range(0, 11).kind(), "binary_expression");
    assert!(root.descendant_for_byte_range(13, 13).is_extra());
    // Space between the expression and the comment.
    assert_eq!(root.descendant_for_byte_range(11, 12), root);
}

#[test]
fn walking_down_one_level_at_a_time() {
    let tree = nested();
    let mut node = tree.root_node();
    let mut path = vec![node.kind()];
    while let Some(child) = node.first_child_for_byte(5) {
        node = child;
        path.push(node.kind());
    }

    assert_eq!(
        path,
        [
            "program",
            "binary_expression",
            "parenthesized_expression",
            "binary_expression",
            "integer"
        ]
    );
    assert_eq!(text(node, NESTED), "2");
    assert_eq!(node.parent().field_name_for_child(2), Some("right"));
}

#[test]
fn point_lookups_match_byte_lookups() {
    let tree = nested();
    let root = tree.root_node();

    for byte in 0..NESTED.len() {
        let point = Point::at_byte(NESTED, byte);
        assert_eq!(
            root.descendant_for_point_range(point, point),
            root.descendant_for_byte_range(byte, byte),
            "byte {byte}"
        );
    }
}

#[test]
fn display_string_of_nested_tree() {
    let tree = nested();
    assert_eq!(
        tree.root_node().to_display_string(),
        "(program (binary_expression left: (parenthesized_expression \
         (binary_expression left: (integer) right: (integer))) right: (integer)) (comment))"
    );
}

#[test]
fn named_children_skip_punctuation() {
    let tree = nested();
    let paren = tree
        .root_node()
        .child(0)
        .child_by_field_name("left")
        .unwrap();

    assert_eq!(paren.child_count(), 3);
    assert_eq!(paren.named_child_count(), 1);
    assert_eq!(paren.named_child(0).unwrap().kind(), "binary_expression");
    assert_eq!(paren.child(0).next_named_sibling(), paren.named_child(0));
    assert_eq!(paren.child(2).prev_named_sibling(), paren.named_child(0));
}

#[test]
fn absence_chains_without_panicking() {
    let tree = nested();
    let root = tree.root_node();

    let nothing = root.parent();
    assert!(nothing.is_null());
    assert!(nothing.child(0).next_sibling().is_null());
    assert_eq!(nothing.kind(), "");
    assert!(!nothing.is_named());
    assert!(root.child(42).child_by_field_name("left").is_null());
    assert!(root.child(1).next_sibling().is_null());
}
