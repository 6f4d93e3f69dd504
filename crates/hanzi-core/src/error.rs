use std::fmt;

/// Failure to produce a dataset at startup. The dataset stays empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("could not load dataset from {location}: {reason}")]
    ResourceUnreachable { location: String, reason: String },

    #[error("could not parse dataset: {0}")]
    ParseFailure(String),
}

/// Reasons a lookup resolves to no record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("dataset is not available")]
    DatasetUnavailable,

    #[error("no record for '{0}'")]
    NotFound(String),
}

/// A malformed row skipped during parsing. Logged, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    /// 1-based line in the resource, when the parser knows it
    pub line: Option<u64>,
    pub message: String,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
