//! Node handles.
//!
//! A [`Node`] is a cheap `Copy` reference to one position in a [`Tree`]. It
//! stores a borrow of the tree's storage and an internal index, nothing else;
//! ranges and flags are read from storage when asked for.
//!
//! Relations that do not exist (the parent of the root, a child index past
//! the end, an unset field) come back as `None`. See [`MaybeNode`] for
//! calling accessors directly on such results.
//!
//! [`Tree`]: crate::Tree

mod display;
mod maybe;
mod navigate;
mod position;

pub use maybe::MaybeNode;
pub use navigate::{Children, FieldChildren, NamedChildren};

use crate::cursor::TreeCursor;
use crate::grammar::{Grammar, Symbol, ERROR_SYMBOL};
use crate::point::{Point, Span};
use crate::tree::{NodeData, NodeId, TreeData};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

/// A handle to one node of a syntax tree.
///
/// Two handles are equal when they denote the same node of the same tree
/// (clones of a [`Tree`](crate::Tree) count as the same tree).
#[derive(Clone, Copy)]
pub struct Node<'tree> {
    tree: &'tree TreeData,
    id: NodeId,
}

impl<'tree> Node<'tree> {
    pub(crate) fn new(tree: &'tree TreeData, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn data(&self) -> &'tree NodeData {
        self.tree.node(self.id)
    }

    fn at(&self, id: NodeId) -> Node<'tree> {
        Node::new(self.tree, id)
    }

    pub fn grammar(&self) -> &'tree Grammar {
        &self.tree.grammar
    }

    /// Kind name of this node, e.g. `"binary_expression"` or `"+"`.
    pub fn kind(&self) -> &'tree str {
        self.tree
            .grammar
            .kind_for_symbol(self.data().symbol)
            .unwrap_or_default()
    }

    /// Numeric kind of this node.
    pub fn symbol(&self) -> Symbol {
        self.data().symbol
    }

    pub fn start_byte(&self) -> usize {
        self.data().span.start_byte
    }

    pub fn end_byte(&self) -> usize {
        self.data().span.end_byte
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.data().span.byte_range()
    }

    pub fn start_point(&self) -> Point {
        self.data().span.start_point
    }

    pub fn end_point(&self) -> Point {
        self.data().span.end_point
    }

    pub fn span(&self) -> Span {
        self.data().span
    }

    /// True for nodes produced by a grammar rule, false for anonymous tokens
    /// such as punctuation and keywords.
    pub fn is_named(&self) -> bool {
        self.data().flags.named
    }

    /// True for zero-width nodes the parser inserted to recover from a
    /// syntax error.
    pub fn is_missing(&self) -> bool {
        self.data().flags.missing
    }

    /// True for nodes outside the regular grammar structure, like comments.
    pub fn is_extra(&self) -> bool {
        self.data().flags.extra
    }

    /// True for `ERROR` nodes wrapping text the parser could not place.
    pub fn is_error(&self) -> bool {
        self.data().symbol == ERROR_SYMBOL
    }

    /// True if this node was touched by the last edit the parser applied
    /// before producing the tree.
    pub fn has_changes(&self) -> bool {
        self.data().flags.changed
    }

    /// True if this node or any descendant is an error or missing node.
    pub fn has_error(&self) -> bool {
        self.data().flags.error
    }

    /// The slice of `source` this node covers.
    pub fn utf8_text<'a>(&self, source: &'a [u8]) -> Result<&'a str, std::str::Utf8Error> {
        let range = self.byte_range();
        let end = range.end.min(source.len());
        let start = range.start.min(end);
        std::str::from_utf8(&source[start..end])
    }

    /// Cursor positioned at this node.
    pub fn walk(&self) -> TreeCursor<'tree> {
        TreeCursor::new(*self)
    }

    /// Position of this node among its parent's children.
    pub(crate) fn index_in_parent(&self) -> usize {
        self.data().slot as usize
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.tree.id == other.tree.id && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tree.id.hash(state);
        self.id.hash(state);
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Node {} {} - {}}}",
            self.kind(),
            self.start_point(),
            self.end_point()
        )
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_sexp(f, *self)
    }
}
