//! Analyze command - detect layout and suggest a column mapping.

use std::path::PathBuf;

use colored::Colorize;
use sheetsense::{Analysis, SheetSenseConfig};

use super::{analyze_path, build_engine};
use crate::cli::DelimiterChoice;

pub fn run(
    file: PathBuf,
    delimiter: Option<DelimiterChoice>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = build_engine(delimiter, SheetSenseConfig::default());
    let analysis = analyze_path(&engine, &file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzed".cyan().bold(),
        file.display().to_string().white()
    );
    print_summary(&analysis);

    println!();
    println!(
        "Run {} to build contacts",
        format!("sheetsense import {}", file.display()).cyan().bold()
    );

    Ok(())
}

fn print_summary(analysis: &Analysis) {
    let source = &analysis.source;
    let delimiter = source
        .delimiter
        .map(|d| format!(" (delimiter {:?})", d))
        .unwrap_or_default();

    println!("Format: {}{}", source.format.white().bold(), delimiter);
    println!(
        "Header row: {}",
        if analysis.has_header {
            "detected".green()
        } else {
            "not detected (synthetic names)".yellow()
        }
    );
    println!(
        "Rows: {}",
        analysis.total_rows.to_string().white().bold()
    );

    println!();
    println!("{}", "Columns:".yellow().bold());
    for (idx, name) in analysis.headers.iter().enumerate() {
        let role = if analysis.mapping.name == Some(idx) {
            "name".green().bold().to_string()
        } else if analysis.mapping.phone == Some(idx) {
            "phone".green().bold().to_string()
        } else {
            String::new()
        };
        println!("  {:>3}  {:30} {}", idx, name, role);
    }

    if analysis.mapping.name.is_none() {
        println!("{}", "No name column suggested".yellow());
    }
    if analysis.mapping.phone.is_none() {
        println!("{}", "No phone column suggested".yellow());
    }

    if !analysis.preview.is_empty() {
        println!();
        println!("{}", "Preview:".yellow().bold());
        for row in &analysis.preview {
            println!("  {}", row.join(" | "));
        }
    }
}
