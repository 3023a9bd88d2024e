//! Header row detection.
//!
//! Row 0 is scored cell by cell: words push towards "header", numbers and
//! e-mail addresses push towards "data". A sum of at least
//! [`HEADER_SIGNAL_THRESHOLD`] means the row is a header.
//!
//! A grid with a single row is the exception: if any of its cells has a
//! negative signal (a number or an `@`), the row is data whatever the sum.
//! `["Nome", "Telefone", "2024"]` sums to 3 but is kept as data when it is
//! the only row.
//!
//! Header names are unique. Repeats keep the first occurrence bare and get
//! ` 2`, ` 3`, ... suffixes, skipping any name present elsewhere in the row.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::input::{Grid, Row};

/// Minimum summed signal for row 0 to be treated as a header.
pub const HEADER_SIGNAL_THRESHOLD: f64 = 1.0;

/// Cell signal for text with letters and no digits.
pub const WORD_SIGNAL: f64 = 2.0;
/// Cell signal for digits without letters.
pub const NUMBER_SIGNAL: f64 = -1.0;
/// Cell signal for anything containing `@`.
pub const EMAIL_SIGNAL: f64 = -1.0;
/// Cell signal for mixed letter/digit content.
pub const MIXED_SIGNAL: f64 = 0.5;

/// Default number of body rows shown in the preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Header detection configuration.
#[derive(Debug, Clone)]
pub struct HeaderConfig {
    /// Maximum body rows in the preview.
    pub preview_rows: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Outcome of header classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderClassification {
    /// Whether row 0 was taken as the header.
    pub has_header: bool,
    /// Display names, one per logical column.
    pub header: Vec<String>,
    /// Rows after the header (all rows when there is none).
    pub body: Vec<Row>,
}

/// Bounded view of the body for operator confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// First rows, each truncated or padded to the header length.
    pub rows: Vec<Row>,
    /// Number of body rows.
    pub total_rows: usize,
}

/// Decides whether the first row is a header and builds the [`Header`](HeaderClassification::header).
pub struct HeaderClassifier {
    config: HeaderConfig,
}

impl HeaderClassifier {
    /// Create a new classifier with default configuration.
    pub fn new() -> Self {
        Self {
            config: HeaderConfig::default(),
        }
    }

    /// Create a classifier with custom configuration.
    pub fn with_config(config: HeaderConfig) -> Self {
        Self { config }
    }

    /// Split a grid into header and body.
    pub fn classify(&self, grid: &Grid) -> HeaderClassification {
        let rows = grid.rows();
        let Some(first) = rows.first() else {
            return HeaderClassification {
                has_header: false,
                header: Vec::new(),
                body: Vec::new(),
            };
        };

        let signal = header_signal(first);
        let lone_data_row = rows.len() == 1 && first.iter().any(|cell| cell_signal(cell) < 0.0);
        let has_header = signal >= HEADER_SIGNAL_THRESHOLD && !lone_data_row;
        tracing::debug!(signal, has_header, "classified first row");

        if has_header {
            let names = first
                .iter()
                .enumerate()
                .map(|(idx, cell)| {
                    let name = collapse_whitespace(cell);
                    if name.is_empty() { synthetic_name(idx) } else { name }
                })
                .collect();
            let header = unique_names(names);

            HeaderClassification {
                has_header,
                header,
                body: rows[1..].to_vec(),
            }
        } else {
            HeaderClassification {
                has_header,
                header: (0..grid.max_row_len()).map(synthetic_name).collect(),
                body: rows.to_vec(),
            }
        }
    }

    /// Build the preview for a classification.
    pub fn preview(&self, classification: &HeaderClassification) -> Preview {
        let width = classification.header.len();
        let rows = classification
            .body
            .iter()
            .take(self.config.preview_rows)
            .map(|row| {
                (0..width)
                    .map(|idx| row.get(idx).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Preview {
            rows,
            total_rows: classification.body.len(),
        }
    }
}

impl Default for HeaderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum the per-cell header signals of a row.
pub fn header_signal(row: &[String]) -> f64 {
    row.iter().map(|cell| cell_signal(cell)).sum()
}

/// Header signal of a single cell.
pub fn cell_signal(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        return 0.0;
    }
    if cell.contains('@') {
        return EMAIL_SIGNAL;
    }

    let has_letters = cell.chars().any(char::is_alphabetic);
    let has_digits = cell.chars().any(|c| c.is_ascii_digit());

    match (has_letters, has_digits) {
        (true, false) => WORD_SIGNAL,
        (false, true) => NUMBER_SIGNAL,
        _ => MIXED_SIGNAL,
    }
}

/// Generated name for a column without a usable header (1-based).
pub fn synthetic_name(index: usize) -> String {
    format!("Column {}", index + 1)
}

/// Make display names unique in first-occurrence order.
pub fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut emitted: HashSet<String> = HashSet::new();

    names
        .into_iter()
        .map(|name| {
            if emitted.insert(name.clone()) {
                return name;
            }
            let mut suffix = 2;
            let mut candidate = format!("{} {}", name, suffix);
            while taken.contains(&candidate) {
                suffix += 1;
                candidate = format!("{} {}", name, suffix);
            }
            taken.insert(candidate.clone());
            emitted.insert(candidate.clone());
            candidate
        })
        .collect()
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_word_header_detected() {
        let result = HeaderClassifier::new().classify(&grid(&[
            &["Nome", "Telefone", "Cidade"],
            &["Ana", "11999998888", "Recife"],
        ]));
        assert!(result.has_header);
        assert_eq!(result.header, vec!["Nome", "Telefone", "Cidade"]);
        assert_eq!(result.body.len(), 1);
    }

    #[test]
    fn test_lone_header_row_detected() {
        let result = HeaderClassifier::new().classify(&grid(&[&["Nome", "Telefone", "Cidade"]]));
        assert!(result.has_header);
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_lone_data_row_is_not_header() {
        let result =
            HeaderClassifier::new().classify(&grid(&[&["João", "11999998888", "São Paulo"]]));
        assert!(!result.has_header);
        assert_eq!(result.header, vec!["Column 1", "Column 2", "Column 3"]);
        assert_eq!(result.body.len(), 1);
    }

    #[test]
    fn test_signal_sum() {
        let row: Vec<String> = ["João", "11999998888", "São Paulo"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(header_signal(&row), 3.0);
    }

    #[test]
    fn test_numeric_first_row_is_data() {
        let result = HeaderClassifier::new().classify(&grid(&[
            &["11999998888", "ana@x.com", "Ana"],
            &["11988887777", "bia@x.com", "Bia"],
        ]));
        // -1 - 1 + 2 = 0
        assert!(!result.has_header);
    }

    #[test]
    fn test_cell_signals() {
        assert_eq!(cell_signal("Nome"), WORD_SIGNAL);
        assert_eq!(cell_signal("11999998888"), NUMBER_SIGNAL);
        assert_eq!(cell_signal("(11) 9999-8888"), NUMBER_SIGNAL);
        assert_eq!(cell_signal("ana@example.com"), EMAIL_SIGNAL);
        assert_eq!(cell_signal("Rua 7"), MIXED_SIGNAL);
        assert_eq!(cell_signal(""), 0.0);
        assert_eq!(cell_signal("   "), 0.0);
    }

    #[test]
    fn test_blank_header_cells_get_synthetic_names() {
        let result = HeaderClassifier::new().classify(&grid(&[
            &["  Nome   Completo ", "", "Cidade"],
            &["Ana", "x", "Recife"],
        ]));
        assert!(result.has_header);
        assert_eq!(result.header, vec!["Nome Completo", "Column 2", "Cidade"]);
    }

    #[test]
    fn test_duplicate_header_names_made_unique() {
        let result = HeaderClassifier::new().classify(&grid(&[
            &["Nome", "Obs", "Obs", "", "Column 4"],
            &["Ana", "vip", "recife", "x", "y"],
        ]));
        assert!(result.has_header);
        assert_eq!(result.header, vec!["Nome", "Obs", "Obs 2", "Column 4", "Column 4 2"]);
    }

    #[test]
    fn test_unique_names_skip_existing() {
        let names = unique_names(vec!["Obs".into(), "Obs".into(), "Obs 2".into(), "Obs".into()]);
        assert_eq!(names, vec!["Obs", "Obs 3", "Obs 2", "Obs 4"]);
    }

    #[test]
    fn test_lone_row_with_number_is_data() {
        let result = HeaderClassifier::new().classify(&grid(&[&["Nome", "Telefone", "2024"]]));
        assert!(!result.has_header);
        assert_eq!(result.body.len(), 1);
    }

    #[test]
    fn test_no_header_uses_widest_row() {
        let result = HeaderClassifier::new().classify(&grid(&[
            &["11999998888", "ana@x.com"],
            &["11988887777", "bia@x.com", "extra"],
        ]));
        assert!(!result.has_header);
        assert_eq!(result.header, vec!["Column 1", "Column 2", "Column 3"]);
        assert_eq!(result.body.len(), 2);
    }

    #[test]
    fn test_empty_grid() {
        let result = HeaderClassifier::new().classify(&Grid::empty());
        assert!(!result.has_header);
        assert!(result.header.is_empty());
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_preview_pads_and_truncates() {
        let classifier = HeaderClassifier::new();
        let result = classifier.classify(&grid(&[
            &["Nome", "Telefone"],
            &["Ana"],
            &["Bia", "1199", "sobra"],
            &["Caio", "1"],
            &["Duda", "2"],
            &["Enzo", "3"],
            &["Fabi", "4"],
        ]));
        let preview = classifier.preview(&result);
        assert_eq!(preview.total_rows, 6);
        assert_eq!(preview.rows.len(), 5);
        assert_eq!(preview.rows[0], vec!["Ana", ""]);
        assert_eq!(preview.rows[1], vec!["Bia", "1199"]);
    }
}
