use hanzi_core::dictionary::DatasetSource;
use hanzi_core::{Column, HanziRecord, LoadError, RowWarning};

use crate::dictionary::HanziDataset;

/// Parse output: the dataset plus rows that were skipped
pub struct ParsedDataset {
    pub dataset: HanziDataset,
    pub warnings: Vec<RowWarning>,
}

pub struct HanziLoader;

impl HanziLoader {
    /// Fetch the resource once and parse it
    pub async fn load(source: &dyn DatasetSource) -> Result<ParsedDataset, LoadError> {
        tracing::info!("Loading hanzi dataset from {}", source.location());
        let bytes = source.fetch().await?;
        let parsed = Self::parse(&bytes)?;

        if !parsed.warnings.is_empty() {
            tracing::warn!(
                "Skipped {} malformed dataset rows",
                parsed.warnings.len()
            );
            for warning in &parsed.warnings {
                tracing::warn!("Dataset row skipped: {}", warning);
            }
        }

        Self::log_preview(&parsed.dataset);
        Ok(parsed)
    }

    /// Parse comma separated text with a header row into records.
    ///
    /// Headers are trimmed and lower-cased, then looked up in
    /// [`hanzi_core::COLUMN_TABLE`]; anything else is dropped. Every value is
    /// trimmed and missing cells become empty strings. Rows whose field count
    /// differs from the header are skipped and reported as warnings.
    pub fn parse(bytes: &[u8]) -> Result<ParsedDataset, LoadError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| LoadError::ParseFailure(format!("dataset is not valid UTF-8: {e}")))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        if text.trim().is_empty() {
            return Err(LoadError::ParseFailure("dataset has no header row".to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b',')
            .flexible(false)
            .from_reader(text.as_bytes());

        let mapping: Vec<Option<Column>> = reader
            .headers()
            .map_err(|e| LoadError::ParseFailure(format!("reading header row: {e}")))?
            .iter()
            .map(Column::from_header)
            .collect();

        let mut columns: Vec<Column> = Vec::new();
        for column in mapping.iter().flatten() {
            if !columns.contains(column) {
                columns.push(*column);
            }
        }

        if columns.is_empty() {
            tracing::warn!("Dataset header has no recognized columns");
        }

        let mut records = Vec::new();
        let mut warnings = Vec::new();

        for result in reader.records() {
            match result {
                Ok(row) => records.push(normalize_row(&mapping, &row)),
                Err(e) => match e.kind() {
                    csv::ErrorKind::UnequalLengths {
                        pos,
                        expected_len,
                        len,
                    } => warnings.push(RowWarning {
                        line: pos.as_ref().map(|p| p.line()),
                        message: format!("expected {expected_len} fields, found {len}"),
                    }),
                    _ => return Err(LoadError::ParseFailure(e.to_string())),
                },
            }
        }

        Ok(ParsedDataset {
            dataset: HanziDataset::new(records, columns),
            warnings,
        })
    }

    fn log_preview(dataset: &HanziDataset) {
        tracing::info!("Loaded {} hanzi records", dataset.len());

        if let Some(first) = dataset.records().first() {
            let preview = serde_json::to_string(first).unwrap_or_default();
            let columns: Vec<&str> = dataset.columns().iter().map(Column::as_str).collect();
            tracing::debug!("First record: {}", preview);
            tracing::debug!("Available columns: {:?}", columns);
        }
    }
}

/// Later duplicate headers overwrite earlier ones
fn normalize_row(mapping: &[Option<Column>], row: &csv::StringRecord) -> HanziRecord {
    let mut record = HanziRecord::default();

    for (idx, column) in mapping.iter().enumerate() {
        if let Some(column) = column {
            let value = row.get(idx).map(str::trim).unwrap_or_default();
            record.set_field(*column, value.to_string());
        }
    }

    record
}
