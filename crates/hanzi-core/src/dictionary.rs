use async_trait::async_trait;

use crate::error::{LoadError, LookupError};
use crate::types::{Column, HanziRecord};

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Resolve a raw query to the first record whose simplified form matches exactly
    fn lookup(&self, query: &str) -> Result<&HanziRecord, LookupError>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Where the raw dataset bytes come from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch the whole resource once
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human readable location, for logs and errors
    fn location(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
    /// Recognized columns present in the source header
    pub columns: Vec<Column>,
}
