//! Main SheetSense struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contact::{Contact, ContactNormalizer, NormalizeOptions};
use crate::error::Result;
use crate::header::{HeaderClassifier, HeaderConfig};
use crate::inference::{RoleInferencer, RoleRules};
use crate::input::{Extracted, Row, RowExtractor, SourceMetadata, TokenizerConfig};
use crate::mapping::Mapping;
use crate::records::{Record, rows_to_objects};

/// Configuration for SheetSense ingestion.
#[derive(Debug, Clone, Default)]
pub struct SheetSenseConfig {
    /// Tokenizer configuration (text input).
    pub tokenizer: TokenizerConfig,
    /// Header detection configuration.
    pub header: HeaderConfig,
    /// Role inference rule table.
    pub roles: RoleRules,
    /// Contact normalization options.
    pub normalize: NormalizeOptions,
}

/// Result of the analysis phase, shown to the operator for confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Metadata about the source.
    pub source: SourceMetadata,
    /// Whether row 0 was taken as the header.
    pub has_header: bool,
    /// Display names, one per column.
    pub headers: Vec<String>,
    /// First body rows, shaped to the header.
    pub preview: Vec<Row>,
    /// Number of body rows.
    pub total_rows: usize,
    /// Every body row, unpadded.
    pub body_rows: Vec<Row>,
    /// Suggested mapping for the built-in roles.
    pub mapping: Mapping,
}

/// The main ingestion engine.
pub struct SheetSense {
    extractor: RowExtractor,
    classifier: HeaderClassifier,
    inferencer: RoleInferencer,
    normalizer: ContactNormalizer,
}

impl SheetSense {
    /// Create a SheetSense instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SheetSenseConfig::default())
    }

    /// Create a SheetSense instance with custom configuration.
    pub fn with_config(config: SheetSenseConfig) -> Self {
        Self {
            extractor: RowExtractor::with_config(config.tokenizer),
            classifier: HeaderClassifier::with_config(config.header),
            inferencer: RoleInferencer::with_rules(config.roles),
            normalizer: ContactNormalizer::with_options(config.normalize),
        }
    }

    /// Analyze a file on disk.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<Analysis> {
        let extracted = self.extractor.extract_file(path)?;
        Ok(self.analyze_extracted(extracted))
    }

    /// Analyze raw bytes; the format is chosen by `file_name`'s suffix.
    pub fn analyze(&self, bytes: &[u8], file_name: &str) -> Result<Analysis> {
        let extracted = self.extractor.extract(bytes, file_name)?;
        Ok(self.analyze_extracted(extracted))
    }

    fn analyze_extracted(&self, extracted: Extracted) -> Analysis {
        let Extracted { grid, source } = extracted;

        let classification = self.classifier.classify(&grid);
        let preview = self.classifier.preview(&classification);
        let mapping = self
            .inferencer
            .infer(&classification.header, &classification.body);

        tracing::info!(
            has_header = classification.has_header,
            columns = classification.header.len(),
            rows = preview.total_rows,
            name = ?mapping.name,
            phone = ?mapping.phone,
            "analysis complete"
        );

        Analysis {
            source,
            has_header: classification.has_header,
            headers: classification.header,
            preview: preview.rows,
            total_rows: preview.total_rows,
            body_rows: classification.body,
            mapping,
        }
    }

    /// Build contacts from an analysis and the operator's final mapping.
    pub fn contacts(&self, analysis: &Analysis, mapping: &Mapping) -> Vec<Contact> {
        self.warn_out_of_range(analysis, mapping);
        self.normalizer
            .normalize(&analysis.body_rows, mapping, &analysis.headers)
    }

    /// Project the body into records keyed by machine keys.
    pub fn records(&self, analysis: &Analysis) -> Vec<Record> {
        rows_to_objects(&analysis.headers, &analysis.body_rows)
    }

    fn warn_out_of_range(&self, analysis: &Analysis, mapping: &Mapping) {
        let columns = analysis.headers.len();
        let out_of_range: Vec<usize> = mapping
            .name
            .into_iter()
            .chain(mapping.phone)
            .chain(mapping.extras.iter().copied())
            .filter(|&idx| idx >= columns)
            .collect();

        if !out_of_range.is_empty() {
            tracing::warn!(?out_of_range, columns, "mapping indices outside the header; treated as empty");
        }
    }
}

impl Default for SheetSense {
    fn default() -> Self {
        Self::new()
    }
}
