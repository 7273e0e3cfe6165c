use crate::grammar::{FieldId, Grammar, Symbol, ERROR_SYMBOL};
use crate::point::Span;
use crate::tree::errors::BuildError;
use crate::tree::{ChildSlot, NodeData, NodeFlags, NodeId, Tree, TreeData, TreeId};
use std::sync::Arc;
use tracing::{debug, trace};

/// Description of one node handed to [`TreeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    symbol: Symbol,
    field: Option<FieldId>,
    span: Option<Span>,
    named: Option<bool>,
    missing: bool,
    extra: bool,
    changed: bool,
}

impl NodeSpec {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            field: None,
            span: None,
            named: None,
            missing: false,
            extra: false,
            changed: false,
        }
    }

    /// Label the slot this node occupies in its parent.
    pub fn field(mut self, field: FieldId) -> Self {
        self.field = Some(field);
        self
    }

    /// Explicit span. Interior nodes without one cover their children.
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Override the named-ness the grammar assigns to the symbol, as parser
    /// aliases do.
    pub fn named(mut self, named: bool) -> Self {
        self.named = Some(named);
        self
    }

    /// Mark as synthesized by error recovery.
    pub fn missing(mut self) -> Self {
        self.missing = true;
        self
    }

    /// Mark as outside the grammar's regular structure (comments and the like).
    pub fn extra(mut self) -> Self {
        self.extra = true;
        self
    }

    /// Mark as touched by the most recent edit.
    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }

    pub(crate) fn with_flags(mut self, missing: bool, extra: bool, changed: bool) -> Self {
        self.missing = missing;
        self.extra = extra;
        self.changed = changed;
        self
    }
}

#[derive(Debug)]
struct OpenNode {
    id: NodeId,
    explicit_span: Option<Span>,
    children: Vec<ChildSlot>,
    named_count: u32,
}

/// Assembles tree storage from a pre-order stream of node events.
///
/// This is the hand-over point between a parser and the navigation layer:
/// the parser calls [`start_node`](Self::start_node) and
/// [`finish_node`](Self::finish_node) around each interior node (or
/// [`token`](Self::token) for leaves) and finally [`build`](Self::build).
#[derive(Debug)]
pub struct TreeBuilder {
    grammar: Arc<Grammar>,
    nodes: Vec<NodeData>,
    slots: Vec<ChildSlot>,
    named_slots: Vec<NodeId>,
    open: Vec<OpenNode>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    pub fn new(grammar: impl Into<Arc<Grammar>>) -> Self {
        Self {
            grammar: grammar.into(),
            nodes: Vec::new(),
            slots: Vec::new(),
            named_slots: Vec::new(),
            open: Vec::new(),
            root: None,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Open a node. Subsequent nodes become its children until the matching
    /// [`finish_node`](Self::finish_node).
    pub fn start_node(&mut self, spec: NodeSpec) -> Result<&mut Self, BuildError> {
        if !self.grammar.contains_symbol(spec.symbol) {
            return Err(BuildError::UnknownSymbol {
                symbol: spec.symbol,
                grammar: self.grammar.name().to_string(),
            });
        }
        if let Some(field) = spec.field {
            if self.grammar.field_name_for_id(field).is_none() {
                return Err(BuildError::UnknownField {
                    field,
                    grammar: self.grammar.name().to_string(),
                });
            }
        }
        if let Some(span) = spec.span {
            if !span.is_ordered() {
                return Err(BuildError::InvertedSpan {
                    kind: self.kind(spec.symbol),
                    start_byte: span.start_byte,
                    end_byte: span.end_byte,
                });
            }
        }

        let raw_id = u32::try_from(self.nodes.len()).map_err(|_| BuildError::TooManyNodes {
            limit: u32::MAX as usize,
        })?;
        let id = NodeId(raw_id);
        let named = spec
            .named
            .unwrap_or_else(|| self.grammar.symbol_is_named(spec.symbol));

        let (parent, slot, named_slot) = match self.open.last_mut() {
            Some(parent) => {
                let slot = parent.children.len() as u32;
                let named_slot = named.then(|| {
                    parent.named_count += 1;
                    parent.named_count - 1
                });
                parent.children.push(ChildSlot {
                    node: id,
                    field: spec.field,
                });
                (Some(parent.id), slot, named_slot)
            }
            None => {
                if self.root.is_some() {
                    return Err(BuildError::MultipleRoots);
                }
                if spec.field.is_some() {
                    return Err(BuildError::FieldOnRoot);
                }
                self.root = Some(id);
                (None, 0, None)
            }
        };

        trace!(symbol = spec.symbol, depth = self.open.len(), "start node");

        self.nodes.push(NodeData {
            symbol: spec.symbol,
            span: spec.span.unwrap_or_default(),
            flags: NodeFlags {
                named,
                missing: spec.missing,
                extra: spec.extra,
                changed: spec.changed,
                error: spec.missing || spec.symbol == ERROR_SYMBOL,
            },
            parent,
            slot,
            named_slot,
            children: 0..0,
            named_children: 0..0,
        });
        self.open.push(OpenNode {
            id,
            explicit_span: spec.span,
            children: Vec::new(),
            named_count: 0,
        });

        Ok(self)
    }

    /// Close the most recently opened node.
    ///
    /// On error the node stays open, so [`build`](Self::build) cannot
    /// succeed with it half-assembled.
    pub fn finish_node(&mut self) -> Result<&mut Self, BuildError> {
        let open = self.open.last().ok_or(BuildError::UnbalancedFinish)?;
        let symbol = self.nodes[open.id.index()].symbol;

        let mut covered: Option<Span> = None;
        let mut child_error = false;
        for child in &open.children {
            let data = &self.nodes[child.node.index()];
            if let Some(previous) = covered {
                if data.span.start_byte < previous.end_byte {
                    return Err(BuildError::UnorderedChildren {
                        kind: self.kind(data.symbol),
                        start_byte: data.span.start_byte,
                        previous_end: previous.end_byte,
                    });
                }
                if data.span.start_point < previous.end_point {
                    return Err(BuildError::UnorderedPoints {
                        kind: self.kind(data.symbol),
                        start_point: data.span.start_point,
                        previous_end: previous.end_point,
                    });
                }
            }
            if let Some(parent_span) = open.explicit_span {
                if !parent_span.contains(&data.span) {
                    return Err(BuildError::ChildOutsideParent {
                        child: self.kind(data.symbol),
                        parent: self.kind(symbol),
                    });
                }
            }
            child_error |= data.flags.error;
            covered = Some(match covered {
                Some(span) => span.cover(&data.span),
                None => data.span,
            });
        }

        let span = open
            .explicit_span
            .or(covered)
            .ok_or_else(|| BuildError::MissingSpan {
                kind: self.kind(symbol),
            })?;
        let open = self.open.pop().ok_or(BuildError::UnbalancedFinish)?;

        let slot_start = self.slots.len() as u32;
        self.slots.extend_from_slice(&open.children);
        let slot_end = self.slots.len() as u32;

        let named_start = self.named_slots.len() as u32;
        for child in &open.children {
            if self.nodes[child.node.index()].flags.named {
                self.named_slots.push(child.node);
            }
        }
        let named_end = self.named_slots.len() as u32;

        let data = &mut self.nodes[open.id.index()];
        data.span = span;
        data.flags.error |= child_error;
        data.children = slot_start..slot_end;
        data.named_children = named_start..named_end;

        Ok(self)
    }

    /// Add a leaf node. The spec must carry a span.
    pub fn token(&mut self, spec: NodeSpec) -> Result<&mut Self, BuildError> {
        self.start_node(spec)?.finish_node()
    }

    pub fn build(self) -> Result<Tree, BuildError> {
        if !self.open.is_empty() {
            return Err(BuildError::UnclosedNodes {
                count: self.open.len(),
            });
        }
        let root = self.root.ok_or(BuildError::EmptyTree)?;

        debug!(
            grammar = self.grammar.name(),
            nodes = self.nodes.len(),
            has_error = self.nodes[root.index()].flags.error,
            "built syntax tree"
        );

        Ok(Tree::from_data(TreeData {
            id: TreeId::next(),
            grammar: self.grammar,
            nodes: self.nodes,
            slots: self.slots,
            named_slots: self.named_slots,
            root,
        }))
    }

    fn kind(&self, symbol: Symbol) -> String {
        self.grammar
            .kind_for_symbol(symbol)
            .unwrap_or("<unknown>")
            .to_string()
    }
}
