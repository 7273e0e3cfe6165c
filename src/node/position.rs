//! Position-based lookups.
//!
//! Children of a node never overlap and appear in source order, so their end
//! offsets are non-decreasing. Every lookup here binary-searches a child list
//! on that order; descending from a node to the target costs
//! O(depth * log(children)).

use super::Node;
use crate::point::{Point, Span};

impl<'tree> Node<'tree> {
    /// First child that ends after `byte`: the child containing `byte`, or
    /// the first one starting after it.
    ///
    /// Calling this repeatedly walks down one level at a time towards an
    /// offset. `None` if no child ends after `byte`.
    pub fn first_child_for_byte(&self, byte: usize) -> Option<Node<'tree>> {
        let slots = self.tree.children_of(self.id);
        let index = slots.partition_point(|slot| self.tree.node(slot.node).span.end_byte <= byte);
        slots.get(index).map(|slot| self.at(slot.node))
    }

    /// Like [`first_child_for_byte`](Self::first_child_for_byte), over named
    /// children only.
    pub fn first_named_child_for_byte(&self, byte: usize) -> Option<Node<'tree>> {
        let ids = self.tree.named_children_of(self.id);
        let index = ids.partition_point(|&id| self.tree.node(id).span.end_byte <= byte);
        ids.get(index).map(|&id| self.at(id))
    }

    /// Smallest node at or below this one whose byte range covers
    /// `[from, to)`.
    ///
    /// A range reaching outside this node yields this node. Reversed bounds
    /// are swapped.
    pub fn descendant_for_byte_range(&self, from: usize, to: usize) -> Node<'tree> {
        self.descend(from, to, byte_bounds, false)
    }

    /// Like [`descendant_for_byte_range`](Self::descendant_for_byte_range),
    /// returning the deepest named node on the path.
    pub fn named_descendant_for_byte_range(&self, from: usize, to: usize) -> Node<'tree> {
        self.descend(from, to, byte_bounds, true)
    }

    pub fn descendant_for_point_range(&self, from: Point, to: Point) -> Node<'tree> {
        self.descend(from, to, point_bounds, false)
    }

    pub fn named_descendant_for_point_range(&self, from: Point, to: Point) -> Node<'tree> {
        self.descend(from, to, point_bounds, true)
    }

    fn descend<K: Ord + Copy>(
        &self,
        from: K,
        to: K,
        bounds: fn(&Span) -> (K, K),
        named_only: bool,
    ) -> Node<'tree> {
        let (from, to) = if from > to { (to, from) } else { (from, to) };
        let mut node = *self;
        let mut found = *self;

        loop {
            let slots = self.tree.children_of(node.id);
            // A candidate must end at or after `to` and strictly after
            // `from`; the first such child is the only one that can start
            // early enough.
            let index = slots.partition_point(|slot| {
                let (_, end) = bounds(&self.tree.node(slot.node).span);
                end < to || end <= from
            });
            let Some(slot) = slots.get(index) else {
                break;
            };
            let child = self.at(slot.node);
            let (start, _) = bounds(&child.data().span);
            if from < start {
                break;
            }
            node = child;
            if !named_only || child.is_named() {
                found = child;
            }
        }

        found
    }
}

fn byte_bounds(span: &Span) -> (usize, usize) {
    (span.start_byte, span.end_byte)
}

fn point_bounds(span: &Span) -> (Point, Point) {
    (span.start_point, span.end_point)
}
