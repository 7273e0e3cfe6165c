//! Thread-local parser pooling.
//!
//! Building a [`SourceParser`] sets the tree-sitter language and extracts the
//! grammar tables, so the Rust parser is created once per thread and reused
//! for subsequent parses.

use crate::tree::Tree;
use crate::ts::{SourceParser, TreeSitterError};
use std::cell::RefCell;

thread_local! {
    static RUST_PARSER: RefCell<Option<SourceParser>> = const { RefCell::new(None) };
}

/// Execute function with pooled Rust parser instance.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use cst_nav::pool::with_parser;
///
/// let tree = with_parser(|parser| parser.parse("fn main() {}"))??;
/// assert_eq!(tree.root_node().kind(), "source_file");
/// # Ok(())
/// # }
/// ```
pub fn with_parser<F, R>(f: F) -> Result<R, TreeSitterError>
where
    F: FnOnce(&mut SourceParser) -> R,
{
    RUST_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let parser = match slot.as_mut() {
            Some(parser) => parser,
            None => slot.insert(SourceParser::rust()?),
        };
        Ok(f(parser))
    })
}

/// Parse Rust source with the pooled parser.
pub fn parse_rust(source: &str) -> Result<Tree, TreeSitterError> {
    with_parser(|parser| parser.parse(source))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pooled_parser_shares_grammar() {
        let first = parse_rust("fn a() {}").unwrap();
        let second = parse_rust("fn b() {}").unwrap();

        assert!(std::sync::Arc::ptr_eq(&first.grammar_arc(), &second.grammar_arc()));
        assert_ne!(first.root_node(), second.root_node());
    }
}
