//! cst-nav: read-only navigation over concrete syntax trees.
//!
//! A parser hands over a finished tree, either a tree-sitter tree through
//! [`ts`] or any other parser's output through [`TreeBuilder`]. The tree is
//! stored once in an arena and navigated through [`Node`] handles that never
//! copy or mutate it.
//!
//! # Architecture
//!
//! - [`Grammar`] holds the symbol table (numeric kind -> name, named flag)
//!   and the field table (field name <-> numeric id).
//! - [`Tree`] owns the arena. [`Node<'tree>`](Node) borrows it, so a handle
//!   cannot outlive its tree.
//! - Every relation that may not exist returns `Option<Node>`. Absence is a
//!   normal outcome, never an error; [`MaybeNode`] adds accessors directly on
//!   such an `Option`.
//! - Field lookups by name resolve the name to an id once and then compare
//!   ids; [`Node::child_by_field_id`] is the fast path.
//!
//! # Concurrency
//!
//! Trees are immutable after construction and `Send + Sync`. Re-parsing
//! produces a new tree, so handles into an older tree stay valid for as long
//! as that tree is alive.
//!
//! # Example
//!
//! ```
//! use cst_nav::{Grammar, NodeSpec, Span, TreeBuilder};
//!
//! let source = "1 + 2";
//! let grammar = Grammar::builder("arith")
//!     .named("binary_expression")
//!     .named("integer")
//!     .anonymous("+")
//!     .field("left")
//!     .field("operator")
//!     .field("right")
//!     .build()
//!     .unwrap();
//! let left = grammar.field_id_for_name("left").unwrap();
//! let operator = grammar.field_id_for_name("operator").unwrap();
//! let right = grammar.field_id_for_name("right").unwrap();
//!
//! let mut builder = TreeBuilder::new(grammar);
//! builder
//!     .start_node(NodeSpec::new(0))?
//!     .token(NodeSpec::new(1).field(left).span(Span::from_source(source, 0..1)))?
//!     .token(NodeSpec::new(2).field(operator).span(Span::from_source(source, 2..3)))?
//!     .token(NodeSpec::new(1).field(right).span(Span::from_source(source, 4..5)))?
//!     .finish_node()?;
//! let tree = builder.build()?;
//!
//! let root = tree.root_node();
//! assert_eq!(root.child_by_field_name("right").unwrap().byte_range(), 4..5);
//! assert_eq!(root.descendant_for_byte_range(4, 5).kind(), "integer");
//! assert_eq!(root.first_child_for_byte(2).unwrap().kind(), "+");
//! # Ok::<(), cst_nav::BuildError>(())
//! ```

pub mod cursor;
pub mod grammar;
pub mod node;
pub mod point;
pub mod pool;
pub mod tree;
pub mod ts;

// Re-exports
pub use cursor::TreeCursor;
pub use grammar::{
    load_from_path, load_from_str, FieldId, Grammar, GrammarBuilder, GrammarError, Symbol,
    ERROR_SYMBOL,
};
pub use node::{Children, FieldChildren, MaybeNode, NamedChildren, Node};
pub use point::{Point, Span};
pub use pool::parse_rust;
pub use tree::{BuildError, NodeSpec, Tree, TreeBuilder};
pub use ts::{grammar_from_language, import_tree, SourceParser, TreeSitterError};
