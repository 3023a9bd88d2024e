//! Grid representation and source metadata.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A single row of string cells. Rows may differ in length.
pub type Row = Vec<String>;

/// Input format, selected purely by file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Delimited text (CSV, TSV, ...).
    Text,
    /// Office Open XML workbook.
    Xlsx,
    /// Legacy binary workbook.
    Xls,
}

impl SourceFormat {
    /// Select the format from a file name. Anything that is not
    /// `.xlsx`/`.xls` (case-insensitive) goes down the text path.
    pub fn from_file_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        match extension.as_deref() {
            Some("xlsx") => SourceFormat::Xlsx,
            Some("xls") => SourceFormat::Xls,
            _ => SourceFormat::Text,
        }
    }

    /// Returns true for the spreadsheet path.
    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, SourceFormat::Xlsx | SourceFormat::Xls)
    }
}

/// Decoded tabular content: ordered rows of trimmed string cells.
///
/// Fully blank rows are never stored. Rows are not padded; missing cells
/// read as `""` through [`Grid::cell`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Build a grid, dropping rows whose cells are all blank after trimming.
    pub fn new(rows: Vec<Row>) -> Self {
        let rows = rows.into_iter().filter(|row| !is_blank_row(row)).collect();
        Self { rows }
    }

    /// An empty grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the grid and return its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Get a specific cell value, `""` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Returns true if every cell of the row is empty after trimming.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Metadata about the ingested source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetadata {
    /// File name as supplied by the caller.
    pub file: String,
    /// Detected format label (csv, csv-semicolon, tsv, psv, xlsx, xls).
    pub format: String,
    /// Delimiter used on the text path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    /// Detected text encoding (`binary` for spreadsheets).
    pub encoding: String,
    /// SHA-256 hash of the raw bytes.
    pub hash: String,
    /// Raw size in bytes.
    pub size_bytes: u64,
    /// Rows in the grid, header row included.
    pub row_count: usize,
    /// Longest row in the grid.
    pub column_count: usize,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a decoded source.
    pub fn new(file: impl Into<String>, bytes: &[u8], format: String, encoding: String) -> Self {
        Self {
            file: file.into(),
            format,
            delimiter: None,
            encoding,
            hash: content_hash(bytes),
            size_bytes: bytes.len() as u64,
            row_count: 0,
            column_count: 0,
            analyzed_at: Utc::now(),
        }
    }

    /// Record the delimiter used for text input.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter as char);
        self
    }

    /// Record the shape of the decoded grid.
    pub fn with_shape(mut self, grid: &Grid) -> Self {
        self.row_count = grid.row_count();
        self.column_count = grid.max_row_len();
        self
    }
}

/// Compute the `sha256:`-prefixed hash of the raw input.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}
