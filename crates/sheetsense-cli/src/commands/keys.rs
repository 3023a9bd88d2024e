//! Keys command - print body rows as machine-keyed records.

use std::path::PathBuf;

use sheetsense::SheetSenseConfig;

use super::{analyze_path, build_engine};
use crate::cli::DelimiterChoice;

pub fn run(file: PathBuf, delimiter: Option<DelimiterChoice>) -> Result<(), Box<dyn std::error::Error>> {
    let engine = build_engine(delimiter, SheetSenseConfig::default());
    let analysis = analyze_path(&engine, &file)?;
    let records = engine.records(&analysis);

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
