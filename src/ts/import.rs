use crate::grammar::{Grammar, GrammarError};
use crate::point::{Point, Span};
use crate::tree::{NodeSpec, Tree, TreeBuilder};
use crate::ts::errors::TreeSitterError;
use std::sync::Arc;
use tracing::debug;

/// Copy a tree-sitter language's symbol and field tables.
///
/// Symbols keep their tree-sitter ids, so `Node::symbol` on an imported tree
/// equals `kind_id` on the original.
pub fn grammar_from_language(
    name: &str,
    language: &tree_sitter::Language,
) -> Result<Grammar, GrammarError> {
    let mut builder = Grammar::builder(name);

    for id in 0..language.node_kind_count() {
        let Ok(id) = u16::try_from(id) else {
            break;
        };
        let kind = language.node_kind_for_id(id).unwrap_or_default();
        builder = builder.symbol(kind, language.node_kind_is_named(id));
    }

    for id in 1..=language.field_count() {
        let Ok(id) = u16::try_from(id) else {
            break;
        };
        let name = language.field_name_for_id(id).unwrap_or_default();
        builder = builder.field(name);
    }

    builder.build()
}

/// Copy a tree-sitter tree into arena storage.
///
/// `grammar` must describe the language the tree was parsed with, normally
/// the result of [`grammar_from_language`].
pub fn import_tree(tree: &tree_sitter::Tree, grammar: Arc<Grammar>) -> Result<Tree, TreeSitterError> {
    let mut builder = TreeBuilder::new(grammar);
    let mut cursor = tree.walk();

    'nodes: loop {
        let node = cursor.node();
        let mut spec = NodeSpec::new(node.kind_id())
            .span(span_of(&node))
            .named(node.is_named())
            .with_flags(node.is_missing(), node.is_extra(), node.has_changes());
        if let Some(field) = cursor.field_id() {
            spec = spec.field(field);
        }
        builder.start_node(spec)?;

        if cursor.goto_first_child() {
            continue;
        }
        builder.finish_node()?;

        loop {
            if cursor.goto_next_sibling() {
                continue 'nodes;
            }
            if !cursor.goto_parent() {
                break 'nodes;
            }
            builder.finish_node()?;
        }
    }

    let imported = builder.build()?;
    debug!(
        grammar = imported.grammar().name(),
        nodes = imported.node_count(),
        has_error = imported.root_node().has_error(),
        "imported tree-sitter tree"
    );
    Ok(imported)
}

fn span_of(node: &tree_sitter::Node<'_>) -> Span {
    Span::new(
        node.start_byte(),
        node.end_byte(),
        point(node.start_position()),
        point(node.end_position()),
    )
}

fn point(point: tree_sitter::Point) -> Point {
    Point::new(point.row, point.column)
}
