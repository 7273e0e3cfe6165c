//! Grammar-level symbol and field tables.
//!
//! A [`Grammar`] maps numeric symbols to kind names and numeric field ids to
//! field names. Both tables are fixed once built, so ids stay valid for as
//! long as the grammar (and every tree built against it) is alive.

pub mod errors;
pub mod loader;
pub mod schema;

pub use errors::{GrammarError, GrammarIssue};
pub use loader::{load_from_path, load_from_str};
pub use schema::{GrammarFile, SymbolEntry};

use std::collections::HashMap;
use std::num::NonZeroU16;

/// Numeric node kind. Stable within one grammar.
pub type Symbol = u16;

/// Numeric field id. Zero is reserved, so `Option<FieldId>` means
/// "labelled or not" at no extra cost.
pub type FieldId = NonZeroU16;

/// Symbol carried by parser-synthesized error nodes.
pub const ERROR_SYMBOL: Symbol = u16::MAX;

const ERROR_KIND: &str = "ERROR";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SymbolInfo {
    kind: String,
    named: bool,
}

/// Symbol and field tables for one language.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    symbols: Vec<SymbolInfo>,
    fields: Vec<String>,
    symbol_ids: HashMap<(String, bool), Symbol>,
    field_ids: HashMap<String, FieldId>,
}

impl Grammar {
    pub fn builder(name: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder {
            name: name.into(),
            symbols: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of regular symbols, not counting [`ERROR_SYMBOL`].
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// True if `symbol` is known, including [`ERROR_SYMBOL`].
    pub fn contains_symbol(&self, symbol: Symbol) -> bool {
        symbol == ERROR_SYMBOL || usize::from(symbol) < self.symbols.len()
    }

    pub fn kind_for_symbol(&self, symbol: Symbol) -> Option<&str> {
        if symbol == ERROR_SYMBOL {
            return Some(ERROR_KIND);
        }
        self.symbols
            .get(usize::from(symbol))
            .map(|info| info.kind.as_str())
    }

    /// Named-ness the grammar assigns to `symbol`. Unknown symbols are
    /// reported as anonymous.
    pub fn symbol_is_named(&self, symbol: Symbol) -> bool {
        if symbol == ERROR_SYMBOL {
            return true;
        }
        self.symbols
            .get(usize::from(symbol))
            .is_some_and(|info| info.named)
    }

    /// Look up the first symbol with this kind and named-ness.
    pub fn symbol_for_kind(&self, kind: &str, named: bool) -> Option<Symbol> {
        if named && kind == ERROR_KIND {
            return Some(ERROR_SYMBOL);
        }
        self.symbol_ids.get(&(kind.to_string(), named)).copied()
    }

    /// Look up a kind by name alone, preferring the named symbol.
    pub fn kind_id(&self, kind: &str) -> Option<Symbol> {
        self.symbol_for_kind(kind, true)
            .or_else(|| self.symbol_for_kind(kind, false))
    }

    pub fn field_id_for_name(&self, name: &str) -> Option<FieldId> {
        self.field_ids.get(name).copied()
    }

    pub fn field_name_for_id(&self, id: FieldId) -> Option<&str> {
        self.fields
            .get(usize::from(id.get()) - 1)
            .map(String::as_str)
    }

    /// Iterate over `(id, name)` for every field.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.fields.iter().enumerate().filter_map(|(index, name)| {
            let id = u16::try_from(index + 1).ok().and_then(NonZeroU16::new)?;
            Some((id, name.as_str()))
        })
    }
}

/// Incremental constructor for a [`Grammar`].
///
/// Symbols receive ids in insertion order starting at 0; fields receive ids
/// starting at 1. Repeated kind names are kept as separate symbols (aliases);
/// lookups by name resolve to the first one.
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    name: String,
    symbols: Vec<SymbolInfo>,
    fields: Vec<String>,
}

impl GrammarBuilder {
    pub fn symbol(mut self, kind: impl Into<String>, named: bool) -> Self {
        self.symbols.push(SymbolInfo {
            kind: kind.into(),
            named,
        });
        self
    }

    pub fn named(self, kind: impl Into<String>) -> Self {
        self.symbol(kind, true)
    }

    pub fn anonymous(self, kind: impl Into<String>) -> Self {
        self.symbol(kind, false)
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        let mut issues = Vec::new();

        // The last id is reserved for ERROR.
        if self.symbols.len() >= usize::from(ERROR_SYMBOL) {
            issues.push(GrammarIssue::TooManySymbols {
                count: self.symbols.len(),
            });
        }
        if self.fields.len() >= usize::from(u16::MAX) {
            issues.push(GrammarIssue::TooManyFields {
                count: self.fields.len(),
            });
        }

        let mut symbol_ids = HashMap::new();
        for (index, info) in self.symbols.iter().enumerate() {
            // Parser-internal symbols may be unnamed. They keep their id but
            // cannot be looked up by kind.
            if info.kind.is_empty() {
                continue;
            }
            if let Ok(id) = Symbol::try_from(index) {
                symbol_ids
                    .entry((info.kind.clone(), info.named))
                    .or_insert(id);
            }
        }

        let mut field_ids = HashMap::new();
        for (index, name) in self.fields.iter().enumerate() {
            if name.is_empty() {
                issues.push(GrammarIssue::EmptyField { index });
                continue;
            }
            let Some(id) = u16::try_from(index + 1).ok().and_then(NonZeroU16::new) else {
                continue;
            };
            if field_ids.insert(name.clone(), id).is_some() {
                issues.push(GrammarIssue::DuplicateField { name: name.clone() });
            }
        }

        if !issues.is_empty() {
            return Err(GrammarError::Invalid { issues });
        }

        Ok(Grammar {
            name: self.name,
            symbols: self.symbols,
            fields: self.fields,
            symbol_ids,
            field_ids,
        })
    }
}
