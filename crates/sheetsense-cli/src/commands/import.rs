//! Import command - run both phases and write contacts.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use sheetsense::{Mapping, NormalizeOptions, SheetSenseConfig};

use super::{analyze_path, build_engine};
use crate::cli::DelimiterChoice;

/// Arguments of the import command.
pub struct ImportArgs {
    pub file: PathBuf,
    pub delimiter: Option<DelimiterChoice>,
    pub mapping: Option<PathBuf>,
    pub name: Option<usize>,
    pub phone: Option<usize>,
    pub extras: Vec<usize>,
    pub country_code: bool,
    pub country_code_literal: String,
    pub output: Option<PathBuf>,
}

pub fn run(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.country_code_literal.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!(
            "Country code must be digits only: {}",
            args.country_code_literal
        )
        .into());
    }

    let config = SheetSenseConfig {
        normalize: NormalizeOptions {
            add_country_code: args.country_code,
            country_code: args.country_code_literal.clone(),
            ..NormalizeOptions::default()
        },
        ..SheetSenseConfig::default()
    };
    let engine = build_engine(args.delimiter, config);
    let analysis = analyze_path(&engine, &args.file)?;

    let mapping = final_mapping(&analysis.mapping, &args)?;
    let contacts = engine.contacts(&analysis, &mapping);
    let json = serde_json::to_string_pretty(&contacts)?;

    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            eprintln!(
                "{} {} contacts from {} rows to {}",
                "Wrote".green().bold(),
                contacts.len().to_string().white().bold(),
                analysis.total_rows,
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Suggested mapping, overlaid with the mapping file, overlaid with flags.
fn final_mapping(suggested: &Mapping, args: &ImportArgs) -> Result<Mapping, Box<dyn std::error::Error>> {
    let mut mapping = suggested.clone();

    if let Some(ref path) = args.mapping {
        let edited = Mapping::from_json(&fs::read_to_string(path)?)?;
        mapping = mapping.overridden_by(&edited);
    }

    let flags = Mapping {
        name: args.name,
        phone: args.phone,
        extras: args.extras.clone(),
    };

    Ok(mapping.overridden_by(&flags))
}
