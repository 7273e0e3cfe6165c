use super::Node;
use crate::grammar::FieldId;
use crate::tree::{ChildSlot, NodeId};
use std::iter::FusedIterator;

impl<'tree> Node<'tree> {
    /// Immediate parent, or `None` at the root.
    pub fn parent(&self) -> Option<Node<'tree>> {
        self.data().parent.map(|id| self.at(id))
    }

    /// The `index`-th child, counting anonymous tokens.
    pub fn child(&self, index: usize) -> Option<Node<'tree>> {
        self.slots().get(index).map(|slot| self.at(slot.node))
    }

    pub fn child_count(&self) -> usize {
        self.slots().len()
    }

    /// The `index`-th named child. Indexing is independent of [`child`](Self::child).
    pub fn named_child(&self, index: usize) -> Option<Node<'tree>> {
        self.named_slots().get(index).map(|&id| self.at(id))
    }

    pub fn named_child_count(&self) -> usize {
        self.named_slots().len()
    }

    /// Field label on the `index`-th child slot, if it has one.
    pub fn field_name_for_child(&self, index: usize) -> Option<&'tree str> {
        let field = self.field_id_for_child(index)?;
        self.tree.grammar.field_name_for_id(field)
    }

    pub fn field_id_for_child(&self, index: usize) -> Option<FieldId> {
        self.slots().get(index).and_then(|slot| slot.field)
    }

    /// Child occupying the field called `name`.
    ///
    /// The name is resolved once against the grammar's field table; unknown
    /// names yield `None` without touching the children.
    pub fn child_by_field_name(&self, name: &str) -> Option<Node<'tree>> {
        let field = self.tree.grammar.field_id_for_name(name)?;
        self.child_by_field_id(field)
    }

    /// First child labelled with `field`.
    pub fn child_by_field_id(&self, field: FieldId) -> Option<Node<'tree>> {
        self.slots()
            .iter()
            .find(|slot| slot.field == Some(field))
            .map(|slot| self.at(slot.node))
    }

    /// Every child labelled with `field`, in order.
    pub fn children_by_field_id(&self, field: FieldId) -> FieldChildren<'tree> {
        FieldChildren {
            node: *self,
            slots: self.slots().iter(),
            field: Some(field),
        }
    }

    /// Every child labelled with the field called `name`, in order. Empty for
    /// unknown names.
    pub fn children_by_field_name(&self, name: &str) -> FieldChildren<'tree> {
        let field = self.tree.grammar.field_id_for_name(name);
        FieldChildren {
            node: *self,
            slots: self.slots().iter(),
            field,
        }
    }

    pub fn next_sibling(&self) -> Option<Node<'tree>> {
        let parent = self.parent()?;
        parent.child(self.data().slot as usize + 1)
    }

    pub fn prev_sibling(&self) -> Option<Node<'tree>> {
        let parent = self.parent()?;
        let slot = self.data().slot as usize;
        slot.checked_sub(1).and_then(|index| parent.child(index))
    }

    /// Next named node among the parent's children. Works from anonymous
    /// nodes too: the search starts at the following slot.
    pub fn next_named_sibling(&self) -> Option<Node<'tree>> {
        let parent = self.parent()?;
        match self.data().named_slot {
            Some(named) => parent.named_child(named as usize + 1),
            None => parent.slots()[self.data().slot as usize + 1..]
                .iter()
                .map(|slot| self.at(slot.node))
                .find(Node::is_named),
        }
    }

    pub fn prev_named_sibling(&self) -> Option<Node<'tree>> {
        let parent = self.parent()?;
        match self.data().named_slot {
            Some(named) => (named as usize)
                .checked_sub(1)
                .and_then(|index| parent.named_child(index)),
            None => parent.slots()[..self.data().slot as usize]
                .iter()
                .rev()
                .map(|slot| self.at(slot.node))
                .find(Node::is_named),
        }
    }

    /// Iterate over every child.
    pub fn children(&self) -> Children<'tree> {
        Children {
            node: *self,
            slots: self.slots().iter(),
        }
    }

    /// Iterate over named children.
    pub fn named_children(&self) -> NamedChildren<'tree> {
        NamedChildren {
            node: *self,
            ids: self.named_slots().iter(),
        }
    }

    fn slots(&self) -> &'tree [ChildSlot] {
        self.tree.children_of(self.id)
    }

    fn named_slots(&self) -> &'tree [NodeId] {
        self.tree.named_children_of(self.id)
    }
}

#[derive(Clone)]
pub struct Children<'tree> {
    node: Node<'tree>,
    slots: std::slice::Iter<'tree, ChildSlot>,
}

impl<'tree> Iterator for Children<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|slot| self.node.at(slot.node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|slot| self.node.at(slot.node))
    }
}

impl ExactSizeIterator for Children<'_> {}
impl FusedIterator for Children<'_> {}

#[derive(Clone)]
pub struct NamedChildren<'tree> {
    node: Node<'tree>,
    ids: std::slice::Iter<'tree, NodeId>,
}

impl<'tree> Iterator for NamedChildren<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| self.node.at(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for NamedChildren<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| self.node.at(id))
    }
}

impl ExactSizeIterator for NamedChildren<'_> {}
impl FusedIterator for NamedChildren<'_> {}

#[derive(Clone)]
pub struct FieldChildren<'tree> {
    node: Node<'tree>,
    slots: std::slice::Iter<'tree, ChildSlot>,
    field: Option<FieldId>,
}

impl<'tree> Iterator for FieldChildren<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.field?;
        self.slots
            .find(|slot| slot.field == Some(field))
            .map(|slot| self.node.at(slot.node))
    }
}

impl FusedIterator for FieldChildren<'_> {}
