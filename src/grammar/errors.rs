use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("failed to read grammar from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse grammar TOML{}: {source}", display_path(.path))]
    Toml {
        path: Option<PathBuf>,
        #[source]
        source: toml_edit::de::Error,
    },

    #[error("invalid grammar{}: {}", display_path(.path), IssueList(.issues))]
    InvalidFile {
        path: Option<PathBuf>,
        issues: Vec<GrammarIssue>,
    },

    #[error("invalid grammar: {}", IssueList(.issues))]
    Invalid { issues: Vec<GrammarIssue> },
}

impl GrammarError {
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        let path = Some(path.to_path_buf());
        match self {
            GrammarError::Toml { path: None, source } => GrammarError::Toml { path, source },
            GrammarError::InvalidFile { path: None, issues } | GrammarError::Invalid { issues } => {
                GrammarError::InvalidFile { path, issues }
            }
            other => other,
        }
    }

    /// Validation issues carried by this error, if any.
    pub fn issues(&self) -> &[GrammarIssue] {
        match self {
            GrammarError::InvalidFile { issues, .. } | GrammarError::Invalid { issues } => issues,
            _ => &[],
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarIssue {
    #[error("grammar name is empty")]
    EmptyName,

    #[error("symbol #{index} has an empty kind")]
    EmptyKind { index: usize },

    #[error("field #{index} has an empty name")]
    EmptyField { index: usize },

    #[error("field '{name}' declared twice")]
    DuplicateField { name: String },

    #[error("{} symbol '{kind}' declared twice", flavor(.named))]
    DuplicateSymbol { kind: String, named: bool },

    #[error("{count} symbols exceed the symbol id space")]
    TooManySymbols { count: usize },

    #[error("{count} fields exceed the field id space")]
    TooManyFields { count: usize },
}

struct IssueList<'a>(&'a [GrammarIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, issue) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

fn flavor(named: &bool) -> &'static str {
    if *named {
        "named"
    } else {
        "anonymous"
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" ({})", path.display()),
        None => String::new(),
    }
}
