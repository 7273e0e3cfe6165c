//! Navigation over trees parsed from real Rust source.

use cst_nav::{parse_rust, MaybeNode, Node, SourceParser};

const SOURCE: &str = r#"
/// A configuration struct
struct Config {
    name: String,
    value: i32,
}

impl Config {
    fn new() -> Self {
        Config { name: String::new(), value: 1 + 2 }
    }
}
"#;

fn offset_of(needle: &str) -> usize {
    SOURCE.find(needle).unwrap_or_else(|| panic!("{needle:?} not in source"))
}

fn text(node: Node<'_>) -> &str {
    node.utf8_text(SOURCE.as_bytes()).unwrap()
}

#[test]
fn locate_function_name_by_offset() {
    let tree = parse_rust(SOURCE).unwrap();
    let root = tree.root_node();

    let start = offset_of("new()");
    let name = root.descendant_for_byte_range(start, start + 3);
    assert_eq!(name.kind(), "identifier");
    assert_eq!(text(name), "new");

    let function = name.parent().unwrap();
    assert_eq!(function.kind(), "function_item");
    assert_eq!(function.child_by_field_name("name"), Some(name));
    assert!(text(function.child_by_field_name("body").unwrap()).contains("String::new()"));
}

#[test]
fn struct_fields_through_field_names() {
    let tree = parse_rust(SOURCE).unwrap();
    let root = tree.root_node();

    let item = root
        .named_children()
        .find(|n| n.kind() == "struct_item")
        .unwrap();
    assert_eq!(text(item.child_by_field_name("name").unwrap()), "Config");

    let body = item.child_by_field_name("body").unwrap();
    let names: Vec<_> = body
        .named_children()
        .filter(|n| n.kind() == "field_declaration")
        .map(|n| text(n.child_by_field_name("name").unwrap()))
        .collect();
    assert_eq!(names, ["name", "value"]);
}

#[test]
fn doc_comment_is_an_extra_sibling() {
    let tree = parse_rust(SOURCE).unwrap();
    let root = tree.root_node();

    let comment = root.child(0).unwrap();
    assert!(comment.is_extra());
    assert_eq!(comment.next_named_sibling().kind(), "struct_item");
}

#[test]
fn point_and_byte_lookups_agree() {
    let tree = parse_rust(SOURCE).unwrap();
    let root = tree.root_node();

    let start = offset_of("1 + 2");
    let by_byte = root.named_descendant_for_byte_range(start, start + 5);
    assert_eq!(by_byte.kind(), "binary_expression");

    let by_point = root.named_descendant_for_point_range(by_byte.start_point(), by_byte.end_point());
    assert_eq!(by_point, by_byte);
    assert_eq!(by_byte.start_point().line, 9);
}

#[test]
fn every_node_has_consistent_relations() {
    let tree = parse_rust(SOURCE).unwrap();
    let mut stack = vec![tree.root_node()];
    let mut count = 0;

    while let Some(node) = stack.pop() {
        count += 1;
        assert!(node.start_byte() <= node.end_byte());
        assert!(node.child_count() >= node.named_child_count());
        for (index, child) in node.children().enumerate() {
            assert_eq!(child.parent(), Some(node));
            if let Some(name) = node.field_name_for_child(index) {
                assert!(node.child_by_field_name(name).is_some());
            }
            if let Some(prev) = child.prev_sibling() {
                assert_eq!(prev.next_sibling(), Some(child));
            }
            stack.push(child);
        }
    }

    assert_eq!(count, tree.node_count());
}

#[test]
fn error_recovery_is_reported() {
    let mut parser = SourceParser::rust().unwrap();
    let tree = parser.parse("fn main( { }").unwrap();

    assert!(tree.root_node().has_error());
    let clean = parser.parse("fn main() {}").unwrap();
    assert!(!clean.root_node().has_error());
}

#[test]
fn trees_outlive_the_parser() {
    let tree = {
        let mut parser = SourceParser::rust().unwrap();
        parser.parse("const A: u8 = 1;").unwrap()
    };
    let item = tree.root_node().named_child(0).unwrap();
    assert_eq!(item.kind(), "const_item");
}
