use crate::grammar::Grammar;
use crate::tree::Tree;
use crate::ts::errors::TreeSitterError;
use crate::ts::import::{grammar_from_language, import_tree};
use ast_grep_language::{LanguageExt, SupportLang};
use std::path::Path;
use std::sync::Arc;
use tree_sitter::Parser;

/// Tree-sitter parser for one language, producing navigable [`Tree`]s.
///
/// The language's grammar tables are extracted once at construction and
/// shared by every tree this parser produces.
pub struct SourceParser {
    parser: Parser,
    language: SupportLang,
    grammar: Arc<Grammar>,
}

impl SourceParser {
    pub fn new(language: SupportLang) -> Result<Self, TreeSitterError> {
        let mut parser = Parser::new();
        // Get the tree-sitter Language from ast-grep-language
        let ts_lang = language.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| TreeSitterError::LanguageSet)?;

        let name = format!("{language:?}").to_lowercase();
        let grammar = Arc::new(grammar_from_language(&name, &ts_lang)?);

        Ok(Self {
            parser,
            language,
            grammar,
        })
    }

    /// Parser for Rust source.
    pub fn rust() -> Result<Self, TreeSitterError> {
        Self::new(SupportLang::Rust)
    }

    pub fn language(&self) -> SupportLang {
        self.language
    }

    pub fn grammar(&self) -> Arc<Grammar> {
        Arc::clone(&self.grammar)
    }

    /// Parse source code into a navigable tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, TreeSitterError> {
        let raw = self.parse_raw(source)?;
        self.import(&raw)
    }

    /// Parse a file from disk.
    pub fn parse_file(&mut self, path: &Path) -> Result<Tree, TreeSitterError> {
        let source = std::fs::read_to_string(path).map_err(|e| TreeSitterError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse(&source)
    }

    /// Parse into a tree-sitter tree, for callers that edit and re-parse
    /// themselves before importing.
    pub fn parse_raw(&mut self, source: &str) -> Result<tree_sitter::Tree, TreeSitterError> {
        self.parser
            .parse(source, None)
            .ok_or(TreeSitterError::ParseFailed)
    }

    /// Import a tree-sitter tree produced for this parser's language.
    pub fn import(&self, tree: &tree_sitter::Tree) -> Result<Tree, TreeSitterError> {
        import_tree(tree, self.grammar())
    }
}
