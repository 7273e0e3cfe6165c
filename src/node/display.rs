use super::Node;
use crate::cursor::TreeCursor;
use std::fmt::{self, Write};

impl Node<'_> {
    /// S-expression rendering of this node and its named descendants, e.g.
    /// `(binary_expression left: (integer) right: (integer))`.
    ///
    /// Meant for debugging and tests; the output is not a stable format.
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_sexp(&mut out, *self);
        out
    }
}

pub(super) fn write_sexp(out: &mut impl Write, node: Node<'_>) -> fmt::Result {
    let mut cursor = node.walk();
    write_current(out, &mut cursor, true)
}

fn write_current(out: &mut impl Write, cursor: &mut TreeCursor<'_>, is_root: bool) -> fmt::Result {
    let node = cursor.node();
    let visible = is_root || node.is_named() || node.is_missing();

    if visible {
        if !is_root {
            out.write_char(' ')?;
            if let Some(field) = cursor.field_name() {
                write!(out, "{field}: ")?;
            }
        }
        out.write_char('(')?;
        if node.is_missing() {
            out.write_str("MISSING ")?;
        }
        if node.is_named() {
            out.write_str(node.kind())?;
        } else {
            write!(out, "\"{}\"", node.kind().escape_default())?;
        }
    }

    if cursor.goto_first_child() {
        loop {
            write_current(out, cursor, false)?;
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }

    if visible {
        out.write_char(')')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::grammar::Grammar;
    use crate::node::fixtures::*;
    use crate::point::Span;
    use crate::tree::{NodeSpec, TreeBuilder};

    #[test]
    fn binary_expression_rendering() {
        let tree = binary();
        assert_eq!(
            tree.root_node().to_display_string(),
            "(binary_expression left: (integer) right: (integer))"
        );
    }

    #[test]
    fn display_matches_to_display_string() {
        let tree = program();
        let root = tree.root_node();
        assert_eq!(root.to_string(), root.to_display_string());
        assert_eq!(
            root.to_string(),
            "(program (statement (binary_expression left: (integer) right: (integer))) \
             (comment) (statement (integer)))"
        );
    }

    #[test]
    fn subtree_rendering_omits_own_field() {
        let tree = binary();
        let right = tree.root_node().child(2).unwrap();
        assert_eq!(right.to_display_string(), "(integer)");
    }

    #[test]
    fn anonymous_root_is_quoted() {
        let tree = binary();
        let plus = tree.root_node().child(1).unwrap();
        assert_eq!(plus.to_display_string(), "(\"+\")");
    }

    #[test]
    fn missing_nodes_are_marked() {
        let grammar = Grammar::builder("g")
            .named("statement")
            .named("identifier")
            .anonymous(";")
            .build()
            .unwrap();
        let source = "x";
        let mut builder = TreeBuilder::new(grammar);
        builder
            .start_node(NodeSpec::new(0))
            .unwrap()
            .token(NodeSpec::new(1).span(Span::from_source(source, 0..1)))
            .unwrap()
            .token(NodeSpec::new(2).span(Span::from_source(source, 1..1)).missing())
            .unwrap()
            .finish_node()
            .unwrap();
        let tree = builder.build().unwrap();

        assert_eq!(
            tree.root_node().to_display_string(),
            "(statement (identifier) (MISSING \";\"))"
        );
        assert!(tree.root_node().has_error());
    }
}
