//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SheetSense: turn arbitrary spreadsheets into contact lists
#[derive(Parser)]
#[command(name = "sheetsense")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect format, header and column roles of a file
    Analyze {
        /// Path to the data file (CSV/TSV/XLSX/XLS)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Force a delimiter for text input instead of detecting it
        #[arg(short, long)]
        delimiter: Option<DelimiterChoice>,

        /// Output the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build contacts from a file using the suggested or an edited mapping
    Import {
        /// Path to the data file (CSV/TSV/XLSX/XLS)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Force a delimiter for text input instead of detecting it
        #[arg(short, long)]
        delimiter: Option<DelimiterChoice>,

        /// JSON mapping file, e.g. {"name": 0, "phone": 1, "extras": [2]}
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Column index holding the contact name (0-based)
        #[arg(long)]
        name: Option<usize>,

        /// Column index holding the phone number (0-based)
        #[arg(long)]
        phone: Option<usize>,

        /// Extra column index to capture (repeatable)
        #[arg(long = "extra")]
        extras: Vec<usize>,

        /// Prefix phones with the country code when missing
        #[arg(long)]
        country_code: bool,

        /// Country code digits used by --country-code
        #[arg(long, default_value = "55")]
        country_code_literal: String,

        /// Output path for the contacts JSON (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print body rows as records keyed by normalized header names
    Keys {
        /// Path to the data file (CSV/TSV/XLSX/XLS)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Force a delimiter for text input instead of detecting it
        #[arg(short, long)]
        delimiter: Option<DelimiterChoice>,
    },
}

/// Delimiter override for text input
#[derive(Clone, Copy, Debug)]
pub enum DelimiterChoice {
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl DelimiterChoice {
    /// Byte value of the delimiter.
    pub fn as_byte(self) -> u8 {
        match self {
            DelimiterChoice::Comma => b',',
            DelimiterChoice::Semicolon => b';',
            DelimiterChoice::Tab => b'\t',
            DelimiterChoice::Pipe => b'|',
        }
    }
}

impl std::str::FromStr for DelimiterChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "," | "comma" => Ok(DelimiterChoice::Comma),
            ";" | "semicolon" => Ok(DelimiterChoice::Semicolon),
            "\t" | "\\t" | "tab" => Ok(DelimiterChoice::Tab),
            "|" | "pipe" => Ok(DelimiterChoice::Pipe),
            _ => Err(format!(
                "Unknown delimiter: {}. Use: comma, semicolon, tab, or pipe.",
                s
            )),
        }
    }
}

impl std::fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelimiterChoice::Comma => write!(f, "comma"),
            DelimiterChoice::Semicolon => write!(f, "semicolon"),
            DelimiterChoice::Tab => write!(f, "tab"),
            DelimiterChoice::Pipe => write!(f, "pipe"),
        }
    }
}
