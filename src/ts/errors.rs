use crate::grammar::GrammarError;
use crate::tree::BuildError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeSitterError {
    #[error("failed to set language for parser")]
    LanguageSet,

    #[error("failed to parse source code")]
    ParseFailed,

    #[error("failed to extract grammar tables: {0}")]
    Grammar(#[from] GrammarError),

    #[error("failed to import tree-sitter tree: {0}")]
    Import(#[from] BuildError),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
