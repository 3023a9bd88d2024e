//! CLI command implementations.

pub mod analyze;
pub mod import;
pub mod keys;

use std::path::Path;

use sheetsense::{Analysis, SheetSense, SheetSenseConfig, TokenizerConfig};

use crate::cli::DelimiterChoice;

/// Build an engine honoring the delimiter override.
pub fn build_engine(delimiter: Option<DelimiterChoice>, config: SheetSenseConfig) -> SheetSense {
    SheetSense::with_config(SheetSenseConfig {
        tokenizer: TokenizerConfig {
            delimiter: delimiter.map(DelimiterChoice::as_byte),
            ..config.tokenizer
        },
        ..config
    })
}

/// Check the file exists, then run the analysis phase.
pub fn analyze_path(engine: &SheetSense, file: &Path) -> Result<Analysis, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(engine.analyze_file(file)?)
}
