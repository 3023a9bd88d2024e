//! Example: Analyze a contact spreadsheet and print the contacts.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>

use std::env;
use std::path::Path;

use sheetsense::SheetSense;

fn main() -> sheetsense::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let sense = SheetSense::new();
    let analysis = sense.analyze_file(path)?;

    println!("## Source");
    println!("  File: {}", analysis.source.file);
    println!("  Format: {}", analysis.source.format);
    println!("  Encoding: {}", analysis.source.encoding);
    println!("  Rows: {}", analysis.total_rows);
    println!();

    println!("## Columns (header {})", if analysis.has_header { "detected" } else { "synthetic" });
    for (idx, name) in analysis.headers.iter().enumerate() {
        println!("  {:>3}  {}", idx, name);
    }
    println!();

    println!("## Suggested mapping");
    println!("  name:  {:?}", analysis.mapping.name);
    println!("  phone: {:?}", analysis.mapping.phone);
    println!();

    let contacts = sense.contacts(&analysis, &analysis.mapping);
    println!("## Contacts ({})", contacts.len());
    for contact in contacts.iter().take(10) {
        println!(
            "  {} {}",
            contact.name.as_deref().unwrap_or("-"),
            contact.phone.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
