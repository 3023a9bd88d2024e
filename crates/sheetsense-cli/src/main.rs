//! SheetSense CLI - contact ingestion from arbitrary spreadsheets.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Analyze {
            file,
            delimiter,
            json,
        } => commands::analyze::run(file, delimiter, json),

        Commands::Import {
            file,
            delimiter,
            mapping,
            name,
            phone,
            extras,
            country_code,
            country_code_literal,
            output,
        } => commands::import::run(commands::import::ImportArgs {
            file,
            delimiter,
            mapping,
            name,
            phone,
            extras,
            country_code,
            country_code_literal,
            output,
        }),

        Commands::Keys { file, delimiter } => commands::keys::run(file, delimiter),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
