use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use hanzi_core::dictionary::{Dictionary, DictionaryMetadata};
use hanzi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use hanzi_core::{Column, HanziRecord, LookupError};

/// Ordered, immutable collection of records
#[derive(Debug, Default)]
pub struct HanziDataset {
    records: Vec<HanziRecord>,
    columns: Vec<Column>,
    scans: AtomicU64,
}

impl HanziDataset {
    pub fn new(records: Vec<HanziRecord>, columns: Vec<Column>) -> Self {
        Self {
            records,
            columns,
            scans: AtomicU64::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HanziRecord] {
        &self.records
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// How many times the records have been scanned
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// First record in source order whose simplified form equals `key`
    fn scan(&self, key: &str) -> Option<&HanziRecord> {
        self.scans.fetch_add(1, Ordering::Relaxed);
        self.records.iter().find(|r| r.matches(key))
    }
}

impl Dictionary for HanziDataset {
    fn lookup(&self, query: &str) -> Result<&HanziRecord, LookupError> {
        let key = DefaultPreprocessor.process(query);

        if key.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        if self.records.is_empty() {
            return Err(LookupError::DatasetUnavailable);
        }

        self.scan(key)
            .ok_or_else(|| LookupError::NotFound(key.to_string()))
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Hanzi para no olvidar".to_string(),
            language: "zh".to_string(),
            entry_count: self.records.len(),
            columns: self.columns.clone(),
        }
    }
}

/// Write-once slot for the dataset, shared between the loader and lookups
#[derive(Debug, Default)]
pub struct SharedDataset {
    cell: OnceLock<HanziDataset>,
}

impl SharedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the dataset. Returns false if one was already installed.
    pub fn install(&self, dataset: HanziDataset) -> bool {
        let installed = self.cell.set(dataset).is_ok();
        if !installed {
            tracing::warn!("Dataset already installed, ignoring second load");
        }
        installed
    }

    pub fn get(&self) -> Option<&HanziDataset> {
        self.cell.get()
    }

    pub fn len(&self) -> usize {
        self.cell.get().map_or(0, HanziDataset::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dictionary for SharedDataset {
    fn lookup(&self, query: &str) -> Result<&HanziRecord, LookupError> {
        if DefaultPreprocessor.process(query).is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        match self.cell.get() {
            Some(dataset) => dataset.lookup(query),
            None => Err(LookupError::DatasetUnavailable),
        }
    }

    fn metadata(&self) -> DictionaryMetadata {
        match self.cell.get() {
            Some(dataset) => dataset.metadata(),
            None => HanziDataset::empty().metadata(),
        }
    }
}
