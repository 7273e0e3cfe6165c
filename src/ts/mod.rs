//! tree-sitter integration.
//!
//! tree-sitter is the parser this crate was built around: it parses source
//! text, and this module copies its grammar tables and finished trees into
//! the crate's own storage so they can be navigated without holding on to
//! tree-sitter objects.

pub mod errors;
pub mod import;
pub mod parser;

pub use errors::TreeSitterError;
pub use import::{grammar_from_language, import_tree};
pub use parser::SourceParser;
