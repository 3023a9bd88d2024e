//! Projection of rows into flat string-keyed records.

use std::collections::HashSet;

use indexmap::IndexMap;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::input::Row;

/// A flat record keyed by machine keys, in header order.
pub type Record = IndexMap<String, String>;

/// Derive a machine key from a header cell.
///
/// Strips diacritics, lowercases, turns any whitespace into a space, drops
/// everything outside `[a-z0-9 _]`, turns space runs into `_` and trims `_`
/// from both ends. Returns an empty string when nothing survives.
///
/// Hyphens are dropped like other punctuation, so `E-mail` keys as `email`.
pub fn machine_key(header: &str) -> String {
    let folded: String = header
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '_')
        .collect();

    folded
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .trim_matches('_')
        .to_string()
}

/// Unique machine keys for a header, one per column.
///
/// Empty keys fall back to `col_{n}` (1-based). Repeats get `_2`, `_3`, ...
/// in order of appearance; the first occurrence keeps the bare key.
pub fn machine_keys(header: &[String]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();

    header
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let mut base = machine_key(name);
            if base.is_empty() {
                base = format!("col_{}", idx + 1);
            }

            let mut key = base.clone();
            let mut suffix = 2;
            while used.contains(&key) {
                key = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            used.insert(key.clone());
            key
        })
        .collect()
}

/// Project rows into records keyed by [`machine_keys`].
///
/// Short rows are padded with `""`; cells beyond the header are ignored.
pub fn rows_to_objects(header: &[String], rows: &[Row]) -> Vec<Record> {
    let keys = machine_keys(header);

    rows.iter()
        .map(|row| {
            keys.iter()
                .enumerate()
                .map(|(idx, key)| (key.clone(), row.get(idx).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}
