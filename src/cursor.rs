//! Stateful tree walking.

use crate::grammar::FieldId;
use crate::node::Node;

/// A movable position in a tree, confined to the subtree it was created at.
///
/// Moving is O(1) for every direction. The cursor reports the field label of
/// the slot it currently sits in, which node handles alone cannot tell
/// without asking their parent.
#[derive(Clone)]
pub struct TreeCursor<'tree> {
    start: Node<'tree>,
    current: Node<'tree>,
    depth: u32,
}

impl<'tree> TreeCursor<'tree> {
    pub(crate) fn new(node: Node<'tree>) -> Self {
        Self {
            start: node,
            current: node,
            depth: 0,
        }
    }

    pub fn node(&self) -> Node<'tree> {
        self.current
    }

    /// Depth below the node the cursor was created at.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Field label of the current slot. Always `None` at the starting node.
    pub fn field_id(&self) -> Option<FieldId> {
        if self.current == self.start {
            return None;
        }
        let parent = self.current.parent()?;
        parent.field_id_for_child(self.current.index_in_parent())
    }

    pub fn field_name(&self) -> Option<&'tree str> {
        let field = self.field_id()?;
        self.current.grammar().field_name_for_id(field)
    }

    pub fn goto_first_child(&mut self) -> bool {
        self.descend_to(self.current.child(0))
    }

    pub fn goto_last_child(&mut self) -> bool {
        let last = self
            .current
            .child_count()
            .checked_sub(1)
            .and_then(|index| self.current.child(index));
        self.descend_to(last)
    }

    pub fn goto_next_sibling(&mut self) -> bool {
        if self.current == self.start {
            return false;
        }
        self.move_to(self.current.next_sibling())
    }

    pub fn goto_previous_sibling(&mut self) -> bool {
        if self.current == self.start {
            return false;
        }
        self.move_to(self.current.prev_sibling())
    }

    pub fn goto_parent(&mut self) -> bool {
        if self.current == self.start {
            return false;
        }
        match self.current.parent() {
            Some(parent) => {
                self.current = parent;
                self.depth -= 1;
                true
            }
            None => false,
        }
    }

    /// Move to the first child ending after `byte` and return its index.
    pub fn goto_first_child_for_byte(&mut self, byte: usize) -> Option<usize> {
        let child = self.current.first_child_for_byte(byte)?;
        self.descend_to(Some(child));
        Some(child.index_in_parent())
    }

    /// Restart at `node`, which becomes the new confinement boundary.
    pub fn reset(&mut self, node: Node<'tree>) {
        *self = Self::new(node);
    }

    fn descend_to(&mut self, node: Option<Node<'tree>>) -> bool {
        match node {
            Some(node) => {
                self.current = node;
                self.depth += 1;
                true
            }
            None => false,
        }
    }

    fn move_to(&mut self, node: Option<Node<'tree>>) -> bool {
        match node {
            Some(node) => {
                self.current = node;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::fixtures::*;

    #[test]
    fn walk_binary_with_fields() {
        let tree = binary();
        let mut cursor = tree.walk();

        assert_eq!(cursor.node().kind(), "binary_expression");
        assert_eq!(cursor.field_name(), None);

        assert!(cursor.goto_first_child());
        assert_eq!(cursor.depth(), 1);
        assert_eq!(cursor.field_name(), Some("left"));

        assert!(cursor.goto_next_sibling());
        assert_eq!(cursor.node().kind(), "+");
        assert_eq!(cursor.field_name(), Some("operator"));

        assert!(cursor.goto_next_sibling());
        assert_eq!(cursor.field_name(), Some("right"));
        assert!(!cursor.goto_next_sibling());

        assert!(cursor.goto_previous_sibling());
        assert_eq!(cursor.node().kind(), "+");

        assert!(cursor.goto_parent());
        assert_eq!(cursor.depth(), 0);
        assert!(!cursor.goto_parent());
    }

    #[test]
    fn cursor_stays_inside_its_subtree() {
        let tree = program();
        let statement = tree.root_node().child(0).unwrap();
        let mut cursor = statement.walk();

        assert!(!cursor.goto_next_sibling());
        assert!(!cursor.goto_previous_sibling());
        assert!(!cursor.goto_parent());
        assert!(cursor.goto_last_child());
        assert_eq!(cursor.node().kind(), ";");
        assert!(cursor.goto_parent());
        assert_eq!(cursor.node(), statement);
    }

    #[test]
    fn goto_first_child_for_byte_reports_index() {
        let tree = program();
        let mut cursor = tree.walk();

        assert_eq!(cursor.goto_first_child_for_byte(8), Some(1));
        assert!(cursor.node().is_extra());
        assert_eq!(cursor.goto_first_child_for_byte(8), None);

        cursor.reset(tree.root_node());
        assert_eq!(cursor.goto_first_child_for_byte(15), Some(2));
        assert_eq!(cursor.goto_first_child_for_byte(15), Some(1));
        assert_eq!(cursor.node().kind(), ";");
        assert_eq!(cursor.depth(), 2);
    }

    #[test]
    fn leaf_has_no_children() {
        let tree = binary();
        let mut cursor = tree.root_node().child(0).unwrap().walk();
        assert!(!cursor.goto_first_child());
        assert!(!cursor.goto_last_child());
        assert_eq!(cursor.depth(), 0);
    }
}
