//! Arena storage for a built syntax tree.
//!
//! Every node of a tree lives in one vector indexed by its node id. Child
//! lists are ranges into two flat slot vectors, one with every child and one
//! with named children only, so positional and sibling lookups are O(1).
//!
//! Storage is immutable once [`TreeBuilder::build`] returns. A [`Tree`] may be
//! cloned cheaply; clones share storage and identity.

pub mod builder;
pub mod errors;

pub use builder::{NodeSpec, TreeBuilder};
pub use errors::BuildError;

use crate::cursor::TreeCursor;
use crate::grammar::{FieldId, Grammar, Symbol};
use crate::node::Node;
use crate::point::Span;
use std::fmt;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Index of a node inside its tree's arena. Never handed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Process-unique identity of one built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(u64);

impl TreeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        TreeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NodeFlags {
    pub(crate) named: bool,
    pub(crate) missing: bool,
    pub(crate) extra: bool,
    pub(crate) changed: bool,
    pub(crate) error: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) symbol: Symbol,
    pub(crate) span: Span,
    pub(crate) flags: NodeFlags,
    pub(crate) parent: Option<NodeId>,
    /// Position among the parent's children.
    pub(crate) slot: u32,
    /// Position among the parent's named children, for named nodes.
    pub(crate) named_slot: Option<u32>,
    pub(crate) children: Range<u32>,
    pub(crate) named_children: Range<u32>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ChildSlot {
    pub(crate) node: NodeId,
    pub(crate) field: Option<FieldId>,
}

#[derive(Debug)]
pub(crate) struct TreeData {
    pub(crate) id: TreeId,
    pub(crate) grammar: Arc<Grammar>,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) slots: Vec<ChildSlot>,
    pub(crate) named_slots: Vec<NodeId>,
    pub(crate) root: NodeId,
}

impl TreeData {
    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub(crate) fn children_of(&self, id: NodeId) -> &[ChildSlot] {
        let range = &self.node(id).children;
        &self.slots[range.start as usize..range.end as usize]
    }

    pub(crate) fn named_children_of(&self, id: NodeId) -> &[NodeId] {
        let range = &self.node(id).named_children;
        &self.named_slots[range.start as usize..range.end as usize]
    }
}

/// A built syntax tree.
///
/// Node handles borrow the tree ([`Node<'tree>`](Node)), so the tree cannot
/// be dropped while any handle derived from it is still in use.
///
/// Storage never changes after construction and the type is `Send + Sync`;
/// any number of threads may navigate the same tree at once. A re-parse
/// produces a new `Tree` rather than mutating this one.
#[derive(Clone)]
pub struct Tree {
    data: Arc<TreeData>,
}

impl Tree {
    pub(crate) fn from_data(data: TreeData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn root_node(&self) -> Node<'_> {
        Node::new(&self.data, self.data.root)
    }

    pub fn grammar(&self) -> &Grammar {
        &self.data.grammar
    }

    /// Shared handle to the grammar, for building further trees with it.
    pub fn grammar_arc(&self) -> Arc<Grammar> {
        Arc::clone(&self.data.grammar)
    }

    pub fn node_count(&self) -> usize {
        self.data.nodes.len()
    }

    /// Cursor positioned at the root.
    pub fn walk(&self) -> TreeCursor<'_> {
        self.root_node().walk()
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Tree {:?}}}", self.root_node())
    }
}
