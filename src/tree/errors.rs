use crate::grammar::{FieldId, Symbol};
use crate::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("symbol {symbol} is not defined by grammar '{grammar}'")]
    UnknownSymbol { symbol: Symbol, grammar: String },

    #[error("field id {field} is not defined by grammar '{grammar}'")]
    UnknownField { field: FieldId, grammar: String },

    #[error("the root node cannot carry a field label")]
    FieldOnRoot,

    #[error("node '{kind}' has no children and no explicit span")]
    MissingSpan { kind: String },

    #[error("node '{kind}' has an inverted span {start_byte}..{end_byte}")]
    InvertedSpan {
        kind: String,
        start_byte: usize,
        end_byte: usize,
    },

    #[error("child '{kind}' at byte {start_byte} starts before the previous sibling ends at {previous_end}")]
    UnorderedChildren {
        kind: String,
        start_byte: usize,
        previous_end: usize,
    },

    #[error("child '{kind}' at {start_point} starts before the previous sibling ends at {previous_end}")]
    UnorderedPoints {
        kind: String,
        start_point: Point,
        previous_end: Point,
    },

    #[error("child '{child}' lies outside the span of its parent '{parent}'")]
    ChildOutsideParent { child: String, parent: String },

    #[error("finish_node called with no open node")]
    UnbalancedFinish,

    #[error("{count} node(s) were started but never finished")]
    UnclosedNodes { count: usize },

    #[error("a second root node was started")]
    MultipleRoots,

    #[error("tree has no nodes")]
    EmptyTree,

    #[error("tree exceeds {limit} nodes")]
    TooManyNodes { limit: usize },
}
