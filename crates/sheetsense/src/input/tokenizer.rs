//! Delimited text tokenizer.

use crate::error::Result;

use super::delimiter::detect_delimiter;
use super::source::{Grid, Row};

/// Tokenizer configuration.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Splits normalized text into a [`Grid`].
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer with default configuration.
    pub fn new() -> Self {
        Self {
            config: TokenizerConfig::default(),
        }
    }

    /// Create a tokenizer with custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Resolve the delimiter for this text: the configured one, or detected.
    pub fn delimiter_for(&self, text: &str) -> u8 {
        self.config
            .delimiter
            .unwrap_or_else(|| detect_delimiter(text))
    }

    /// Tokenize text with an explicit delimiter.
    ///
    /// Quoted fields may contain the delimiter and newlines; `""` inside
    /// quotes is a literal quote. Cells are trimmed after unquoting and fully
    /// blank rows are dropped. Rows keep their own length.
    pub fn tokenize(&self, text: &str, delimiter: u8) -> Result<Grid> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .double_quote(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows: Vec<Row> = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|field| field.trim().to_string()).collect());
        }

        Ok(Grid::new(rows))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
