//! Fuzz target for ingestion.
//!
//! Arbitrary bytes go through both the text and spreadsheet paths. Errors
//! are fine; panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sheetsense::SheetSense;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let sense = SheetSense::new();

    if let Ok(analysis) = sense.analyze(data, "fuzz.csv") {
        let _ = sense.contacts(&analysis, &analysis.mapping);
        let _ = sense.records(&analysis);
    }

    let _ = sense.analyze(data, "fuzz.xlsx");
});
