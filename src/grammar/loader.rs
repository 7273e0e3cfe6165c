use crate::grammar::errors::GrammarError;
use crate::grammar::schema::GrammarFile;
use crate::grammar::Grammar;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_from_str(input: &str) -> Result<Grammar, GrammarError> {
    let file: GrammarFile = toml_edit::de::from_str(input)
        .map_err(|source| GrammarError::Toml { path: None, source })?;
    let grammar = file.into_grammar()?;
    debug!(
        grammar = grammar.name(),
        symbols = grammar.symbol_count(),
        fields = grammar.field_count(),
        "loaded grammar"
    );
    Ok(grammar)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Grammar, GrammarError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| GrammarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents).map_err(|error| error.with_path(path))
}
