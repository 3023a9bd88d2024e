//! Row extraction: turns raw bytes of any supported format into a [`Grid`].

use std::fs;
use std::path::Path;

use crate::error::{Result, SheetError};

use super::source::{Grid, SourceFormat, SourceMetadata};
use super::spreadsheet::read_first_sheet;
use super::text::decode_text;
use super::tokenizer::{Tokenizer, TokenizerConfig};

/// A decoded source: the grid plus what was learned while decoding it.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub grid: Grid,
    pub source: SourceMetadata,
}

/// Decodes bytes into a [`Grid`], hiding format differences.
pub struct RowExtractor {
    tokenizer: Tokenizer,
}

impl RowExtractor {
    /// Create a new extractor with default configuration.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Create an extractor with custom tokenizer configuration.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::with_config(config),
        }
    }

    /// Read a file from disk and extract it.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Extracted> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| SheetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.extract(&bytes, &file_name)
    }

    /// Extract bytes whose format is chosen by `file_name`'s suffix.
    pub fn extract(&self, bytes: &[u8], file_name: &str) -> Result<Extracted> {
        let format = SourceFormat::from_file_name(file_name);

        let extracted = match format {
            SourceFormat::Xlsx | SourceFormat::Xls => {
                let grid = read_first_sheet(bytes)?;
                let label = if format == SourceFormat::Xlsx { "xlsx" } else { "xls" };
                let source = SourceMetadata::new(file_name, bytes, label.to_string(), "binary".to_string())
                    .with_shape(&grid);
                Extracted { grid, source }
            }
            SourceFormat::Text => {
                let decoded = decode_text(bytes);
                let delimiter = self.tokenizer.delimiter_for(&decoded.text);
                let grid = self.tokenizer.tokenize(&decoded.text, delimiter)?;
                let source = SourceMetadata::new(
                    file_name,
                    bytes,
                    text_format_label(delimiter).to_string(),
                    decoded.encoding.to_string(),
                )
                .with_delimiter(delimiter)
                .with_shape(&grid);
                Extracted { grid, source }
            }
        };

        tracing::info!(
            file = file_name,
            format = %extracted.source.format,
            rows = extracted.grid.row_count(),
            "extracted rows"
        );

        Ok(extracted)
    }
}

impl Default for RowExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Determine format label from delimiter.
fn text_format_label(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tsv",
        b',' => "csv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}
