use crate::grammar::errors::{GrammarError, GrammarIssue};
use crate::grammar::Grammar;
use serde::Deserialize;
use std::collections::HashSet;

/// On-disk description of a grammar's symbol and field tables.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct GrammarFile {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SymbolEntry {
    pub kind: String,
    #[serde(default = "default_named")]
    pub named: bool,
}

fn default_named() -> bool {
    true
}

impl GrammarFile {
    /// Check the description, collecting every issue rather than stopping at
    /// the first one.
    pub fn validate(&self) -> Result<(), GrammarError> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(GrammarIssue::EmptyName);
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.symbols.iter().enumerate() {
            if entry.kind.is_empty() {
                issues.push(GrammarIssue::EmptyKind { index });
            } else if !seen.insert((entry.kind.as_str(), entry.named)) {
                issues.push(GrammarIssue::DuplicateSymbol {
                    kind: entry.kind.clone(),
                    named: entry.named,
                });
            }
        }

        let mut seen = HashSet::new();
        for (index, name) in self.fields.iter().enumerate() {
            if name.trim().is_empty() {
                issues.push(GrammarIssue::EmptyField { index });
            } else if !seen.insert(name.as_str()) {
                issues.push(GrammarIssue::DuplicateField { name: name.clone() });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(GrammarError::InvalidFile { path: None, issues })
        }
    }

    pub fn into_grammar(self) -> Result<Grammar, GrammarError> {
        self.validate()?;
        let builder = self
            .symbols
            .into_iter()
            .fold(Grammar::builder(self.name), |builder, entry| {
                builder.symbol(entry.kind, entry.named)
            });
        self.fields
            .into_iter()
            .fold(builder, |builder, name| builder.field(name))
            .build()
    }
}
