use super::Node;
use crate::grammar::{FieldId, Symbol};
use crate::point::Point;

/// Accessors and navigation on a possibly absent node.
///
/// Navigation results are `Option<Node>`. This trait lets callers keep going
/// without unwrapping: every accessor on `None` answers with an empty value
/// (`""`, `0`, the zero point, `false`) and every navigation step from
/// `None` stays `None`.
///
/// ```
/// use cst_nav::{Grammar, MaybeNode, NodeSpec, Point, Span, TreeBuilder};
///
/// let grammar = Grammar::builder("flat").named("document").build().unwrap();
/// let mut builder = TreeBuilder::new(grammar);
/// builder
///     .token(NodeSpec::new(0).span(Span::new(0, 20, Point::new(0, 0), Point::new(0, 20))))
///     .unwrap();
/// let tree = builder.build().unwrap();
///
/// let missing = tree.root_node().child(0);
/// assert!(missing.is_null());
/// assert_eq!(missing.kind(), "");
/// assert!(missing.child(3).parent().is_null());
/// ```
pub trait MaybeNode<'tree> {
    fn is_null(&self) -> bool;
    fn kind(&self) -> &'tree str;
    fn symbol(&self) -> Symbol;
    fn start_byte(&self) -> usize;
    fn end_byte(&self) -> usize;
    fn start_point(&self) -> Point;
    fn end_point(&self) -> Point;
    fn to_display_string(&self) -> String;
    fn is_named(&self) -> bool;
    fn is_missing(&self) -> bool;
    fn is_extra(&self) -> bool;
    fn has_changes(&self) -> bool;
    fn has_error(&self) -> bool;
    fn child_count(&self) -> usize;
    fn named_child_count(&self) -> usize;
    fn field_name_for_child(&self, index: usize) -> Option<&'tree str>;

    fn parent(&self) -> Option<Node<'tree>>;
    fn child(&self, index: usize) -> Option<Node<'tree>>;
    fn named_child(&self, index: usize) -> Option<Node<'tree>>;
    fn child_by_field_name(&self, name: &str) -> Option<Node<'tree>>;
    fn child_by_field_id(&self, field: FieldId) -> Option<Node<'tree>>;
    fn next_sibling(&self) -> Option<Node<'tree>>;
    fn prev_sibling(&self) -> Option<Node<'tree>>;
    fn next_named_sibling(&self) -> Option<Node<'tree>>;
    fn prev_named_sibling(&self) -> Option<Node<'tree>>;
    fn first_child_for_byte(&self, byte: usize) -> Option<Node<'tree>>;
    fn first_named_child_for_byte(&self, byte: usize) -> Option<Node<'tree>>;
    fn descendant_for_byte_range(&self, from: usize, to: usize) -> Option<Node<'tree>>;
}

impl<'tree> MaybeNode<'tree> for Option<Node<'tree>> {
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn kind(&self) -> &'tree str {
        self.map(|node| node.kind()).unwrap_or_default()
    }

    fn symbol(&self) -> Symbol {
        self.map(|node| node.symbol()).unwrap_or_default()
    }

    fn start_byte(&self) -> usize {
        self.map(|node| node.start_byte()).unwrap_or_default()
    }

    fn end_byte(&self) -> usize {
        self.map(|node| node.end_byte()).unwrap_or_default()
    }

    fn start_point(&self) -> Point {
        self.map(|node| node.start_point()).unwrap_or_default()
    }

    fn end_point(&self) -> Point {
        self.map(|node| node.end_point()).unwrap_or_default()
    }

    fn to_display_string(&self) -> String {
        self.map(|node| node.to_display_string()).unwrap_or_default()
    }

    fn is_named(&self) -> bool {
        self.is_some_and(|node| node.is_named())
    }

    fn is_missing(&self) -> bool {
        self.is_some_and(|node| node.is_missing())
    }

    fn is_extra(&self) -> bool {
        self.is_some_and(|node| node.is_extra())
    }

    fn has_changes(&self) -> bool {
        self.is_some_and(|node| node.has_changes())
    }

    fn has_error(&self) -> bool {
        self.is_some_and(|node| node.has_error())
    }

    fn child_count(&self) -> usize {
        self.map(|node| node.child_count()).unwrap_or_default()
    }

    fn named_child_count(&self) -> usize {
        self.map(|node| node.named_child_count()).unwrap_or_default()
    }

    fn field_name_for_child(&self, index: usize) -> Option<&'tree str> {
        self.and_then(|node| node.field_name_for_child(index))
    }

    fn parent(&self) -> Option<Node<'tree>> {
        self.and_then(|node| node.parent())
    }

    fn child(&self, index: usize) -> Option<Node<'tree>> {
        self.and_then(|node| node.child(index))
    }

    fn named_child(&self, index: usize) -> Option<Node<'tree>> {
        self.and_then(|node| node.named_child(index))
    }

    fn child_by_field_name(&self, name: &str) -> Option<Node<'tree>> {
        self.and_then(|node| node.child_by_field_name(name))
    }

    fn child_by_field_id(&self, field: FieldId) -> Option<Node<'tree>> {
        self.and_then(|node| node.child_by_field_id(field))
    }

    fn next_sibling(&self) -> Option<Node<'tree>> {
        self.and_then(|node| node.next_sibling())
    }

    fn prev_sibling(&self) -> Option<Node<'tree>> {
        self.and_then(|node| node.prev_sibling())
    }

    fn next_named_sibling(&self) -> Option<Node<'tree>> {
        self.and_then(|node| node.next_named_sibling())
    }

    fn prev_named_sibling(&self) -> Option<Node<'tree>> {
        self.and_then(|node| node.prev_named_sibling())
    }

    fn first_child_for_byte(&self, byte: usize) -> Option<Node<'tree>> {
        self.and_then(|node| node.first_child_for_byte(byte))
    }

    fn first_named_child_for_byte(&self, byte: usize) -> Option<Node<'tree>> {
        self.and_then(|node| node.first_named_child_for_byte(byte))
    }

    fn descendant_for_byte_range(&self, from: usize, to: usize) -> Option<Node<'tree>> {
        self.map(|node| node.descendant_for_byte_range(from, to))
    }
}
